//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub problems_solved: i32,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_solved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Solving-progress subset of the user record.
///
/// Mutated only on a user's first accepted submission for a problem;
/// `longest_streak >= current_streak` holds after every update.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct UserProgress {
    pub problems_solved: i32,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_solved_at: Option<DateTime<Utc>>,
}
