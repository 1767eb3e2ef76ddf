//! Domain models

pub mod problem;
pub mod submission;
pub mod user;

pub use problem::{Problem, TestCase};
pub use submission::Submission;
pub use user::{User, UserProgress};
