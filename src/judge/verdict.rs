//! Verdict classification
//!
//! Maps the execution engine's numeric status codes onto the closed set of
//! verdicts the platform stores and reports.

use serde::{Deserialize, Serialize};

use crate::constants::verdicts;

/// Final classification of a submission or single test-case execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompilationError,
    RuntimeError,
    Pending,
}

impl Verdict {
    /// Classify an engine status code.
    ///
    /// 3 is accepted, 4 wrong answer, 5 time limit, 6 compilation error,
    /// 7 through 14 cover the engine's runtime/internal failure family.
    /// Anything else (including 1 = in queue and 2 = processing) is still
    /// pending and must never be stored as a final verdict.
    pub fn from_status_id(status_id: i32) -> Self {
        match status_id {
            3 => Self::Accepted,
            4 => Self::WrongAnswer,
            5 => Self::TimeLimitExceeded,
            6 => Self::CompilationError,
            7..=14 => Self::RuntimeError,
            _ => Self::Pending,
        }
    }

    /// Get verdict as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => verdicts::ACCEPTED,
            Self::WrongAnswer => verdicts::WRONG_ANSWER,
            Self::TimeLimitExceeded => verdicts::TIME_LIMIT_EXCEEDED,
            Self::CompilationError => verdicts::COMPILATION_ERROR,
            Self::RuntimeError => verdicts::RUNTIME_ERROR,
            Self::Pending => verdicts::PENDING,
        }
    }

    /// Parse verdict from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            verdicts::ACCEPTED => Some(Self::Accepted),
            verdicts::WRONG_ANSWER => Some(Self::WrongAnswer),
            verdicts::TIME_LIMIT_EXCEEDED => Some(Self::TimeLimitExceeded),
            verdicts::COMPILATION_ERROR => Some(Self::CompilationError),
            verdicts::RUNTIME_ERROR => Some(Self::RuntimeError),
            verdicts::PENDING => Some(Self::Pending),
            _ => None,
        }
    }

    /// Check if this verdict means the solution was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
