//! Business logic services

pub mod problem_service;
pub mod streak_service;
pub mod submission_service;

pub use problem_service::ProblemService;
pub use streak_service::StreakService;
pub use submission_service::SubmissionService;
