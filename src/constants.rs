//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

// =============================================================================
// EXECUTION ENGINE DEFAULTS
// =============================================================================

/// Default base URL for the remote execution engine
pub const DEFAULT_JUDGE_BASE_URL: &str = "https://judge0-ce.p.rapidapi.com";

/// Default RapidAPI host header value for the execution engine
pub const DEFAULT_JUDGE_API_HOST: &str = "judge0-ce.p.rapidapi.com";

/// Interval between result polls, in milliseconds
pub const DEFAULT_JUDGE_POLL_INTERVAL_MS: u64 = 1000;

/// Maximum number of result polls before giving up
pub const DEFAULT_JUDGE_MAX_POLL_ATTEMPTS: u32 = 15;

/// Engine status ids at or below this value mean the run has not finished
/// (1 = in queue, 2 = processing)
pub const JUDGE_LAST_NON_TERMINAL_STATUS: i32 = 2;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Language identifiers understood by the execution engine.
///
/// The numeric ids are part of the contract with the engine and must not
/// be changed independently of the deployment.
pub mod languages {
    pub const C: (&str, i32) = ("c", 50);
    pub const CPP: (&str, i32) = ("cpp", 54);
    pub const PYTHON: (&str, i32) = ("python", 71);
    pub const JAVA: (&str, i32) = ("java", 62);
    pub const JAVASCRIPT: (&str, i32) = ("javascript", 63);

    /// All supported (name, engine id) pairs
    pub const ALL: &[(&str, i32)] = &[C, CPP, PYTHON, JAVA, JAVASCRIPT];

    /// Look up the engine language id for a logical language name
    pub fn engine_id(language: &str) -> Option<i32> {
        let needle = language.to_lowercase();
        ALL.iter()
            .find(|(name, _)| *name == needle)
            .map(|(_, id)| *id)
    }
}

// =============================================================================
// SUBMISSION VERDICTS
// =============================================================================

/// Submission verdict identifiers as persisted and exposed over the API
pub mod verdicts {
    pub const ACCEPTED: &str = "accepted";
    pub const WRONG_ANSWER: &str = "wrong_answer";
    pub const TIME_LIMIT_EXCEEDED: &str = "time_limit_exceeded";
    pub const COMPILATION_ERROR: &str = "compilation_error";
    pub const RUNTIME_ERROR: &str = "runtime_error";
    pub const PENDING: &str = "pending";
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Maximum submissions returned for a user's recent-activity listing
pub const USER_SUBMISSIONS_LIMIT: i64 = 50;

/// Maximum submissions returned for a single problem's history listing
pub const PROBLEM_SUBMISSIONS_LIMIT: i64 = 20;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum source code size in bytes (1 MB)
pub const MAX_SOURCE_CODE_SIZE: u64 = 1024 * 1024;

/// Maximum language identifier length
pub const MAX_LANGUAGE_LENGTH: u64 = 20;
