//! User repository

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{error::AppResult, models::UserProgress};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Load a user's progress inside a transaction, taking a row lock.
    ///
    /// Two concurrent first-acceptance submissions for the same user must
    /// not interleave their read-modify-write of the streak counters; the
    /// `FOR UPDATE` lock serializes them at the persistence layer.
    pub async fn progress_for_update(
        tx: &mut Transaction<'_, Postgres>,
        user_id: &Uuid,
    ) -> AppResult<Option<UserProgress>> {
        let progress = sqlx::query_as::<_, UserProgress>(
            r#"
            SELECT problems_solved, current_streak, longest_streak, last_solved_at
            FROM users
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(progress)
    }

    /// Persist updated progress counters for a user
    pub async fn store_progress(
        tx: &mut Transaction<'_, Postgres>,
        user_id: &Uuid,
        progress: &UserProgress,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET problems_solved = $2,
                current_streak = $3,
                longest_streak = $4,
                last_solved_at = $5
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(progress.problems_solved)
        .bind(progress.current_streak)
        .bind(progress.longest_streak)
        .bind(progress.last_solved_at)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
