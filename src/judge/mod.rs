//! Judging core
//!
//! Everything between an incoming submission and its final verdict: the
//! execution engine client, the status-code classifier, and the
//! test-case evaluation loop.

pub mod client;
pub mod evaluator;
pub mod verdict;

pub use client::{CodeExecutor, ExecutionResult, ExecutionStatus, Judge0Client};
pub use evaluator::{EvaluationOutcome, evaluate};
pub use verdict::Verdict;
