//! Execution engine client
//!
//! Submits one (code, language, stdin) unit to the remote execution engine,
//! then polls for completion with bounded retries. The engine accepts a
//! submission asynchronously and returns an opaque token; results are
//! fetched by token until a terminal status is observed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    config::JudgeConfig,
    constants::{JUDGE_LAST_NON_TERMINAL_STATUS, languages},
    error::{AppError, AppResult},
};

/// Engine-reported status of one execution attempt
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionStatus {
    pub id: i32,
    pub description: Option<String>,
}

/// Raw result of one execution attempt, as reported by the engine
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    /// Wall time in seconds, reported as a decimal string
    pub time: Option<String>,
    /// Peak memory in kilobytes
    pub memory: Option<i64>,
}

impl ExecutionResult {
    /// Wall time converted to whole milliseconds, 0 when unreported
    pub fn runtime_ms(&self) -> f64 {
        self.time
            .as_deref()
            .and_then(|t| t.parse::<f64>().ok())
            .map(|seconds| seconds * 1000.0)
            .unwrap_or(0.0)
    }

    /// Peak memory in kilobytes, 0 when unreported
    pub fn memory_kb(&self) -> i64 {
        self.memory.unwrap_or(0)
    }
}

/// Abstraction over the remote code executor.
///
/// The evaluator depends on this trait rather than on a concrete HTTP
/// client so that judging logic can be exercised without network access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    /// Run `source_code` in `language` with `stdin`, suspending until the
    /// engine reaches a terminal status or the poll budget is exhausted.
    async fn execute(
        &self,
        source_code: &str,
        language: &str,
        stdin: &str,
    ) -> AppResult<ExecutionResult>;
}

#[derive(Debug, Serialize)]
struct SubmissionPayload<'a> {
    source_code: &'a str,
    language_id: i32,
    stdin: &'a str,
    base64_encoded: bool,
}

#[derive(Debug, Deserialize)]
struct SubmissionToken {
    token: String,
}

/// HTTP client for the Judge0-compatible execution engine
#[derive(Debug, Clone)]
pub struct Judge0Client {
    http: reqwest::Client,
    config: JudgeConfig,
}

impl Judge0Client {
    /// Create a new client sharing one connection pool across requests
    pub fn new(config: JudgeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Submit a code unit and return the engine's opaque token
    async fn submit(&self, source_code: &str, language_id: i32, stdin: &str) -> AppResult<String> {
        let payload = SubmissionPayload {
            source_code,
            language_id,
            stdin,
            base64_encoded: false,
        };

        let response = self
            .http
            .post(format!("{}/submissions", self.config.base_url))
            .header("x-rapidapi-host", &self.config.api_host)
            .header("x-rapidapi-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let token: SubmissionToken = response.json().await?;
        debug!(token = %token.token, "submission accepted by engine");

        Ok(token.token)
    }

    /// Fetch the current result for a token
    async fn fetch_result(&self, token: &str) -> AppResult<ExecutionResult> {
        let response = self
            .http
            .get(format!("{}/submissions/{}", self.config.base_url, token))
            .query(&[("base64_encoded", "false")])
            .header("x-rapidapi-host", &self.config.api_host)
            .header("x-rapidapi-key", &self.config.api_key)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Poll for a terminal result, sleeping between attempts.
    ///
    /// The wait is a real suspension (`tokio::time::sleep`), so a slow
    /// engine blocks only the submission being judged, never the process.
    async fn poll_for_result(&self, token: &str) -> AppResult<ExecutionResult> {
        for attempt in 1..=self.config.max_poll_attempts {
            tokio::time::sleep(self.config.poll_interval).await;

            let result = self.fetch_result(token).await?;
            debug!(
                attempt,
                status_id = result.status.id,
                "polled engine for result"
            );

            if result.status.id > JUDGE_LAST_NON_TERMINAL_STATUS {
                return Ok(result);
            }
        }

        warn!(
            token,
            attempts = self.config.max_poll_attempts,
            "engine did not reach a terminal status within the poll budget"
        );
        Err(AppError::ExecutionTimeout)
    }
}

#[async_trait]
impl CodeExecutor for Judge0Client {
    async fn execute(
        &self,
        source_code: &str,
        language: &str,
        stdin: &str,
    ) -> AppResult<ExecutionResult> {
        let language_id = languages::engine_id(language)
            .ok_or_else(|| AppError::UnsupportedLanguage(language.to_string()))?;

        let token = self.submit(source_code, language_id, stdin).await?;
        self.poll_for_result(&token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_ms_parses_seconds_string() {
        let result = ExecutionResult {
            status: ExecutionStatus {
                id: 3,
                description: Some("Accepted".to_string()),
            },
            stdout: None,
            stderr: None,
            compile_output: None,
            time: Some("0.042".to_string()),
            memory: Some(1024),
        };
        assert_eq!(result.runtime_ms(), 42.0);
        assert_eq!(result.memory_kb(), 1024);
    }

    #[test]
    fn test_missing_metrics_default_to_zero() {
        let result = ExecutionResult {
            status: ExecutionStatus {
                id: 6,
                description: None,
            },
            stdout: None,
            stderr: None,
            compile_output: Some("error: expected ';'".to_string()),
            time: None,
            memory: None,
        };
        assert_eq!(result.runtime_ms(), 0.0);
        assert_eq!(result.memory_kb(), 0);
    }

    #[test]
    fn test_unparseable_time_defaults_to_zero() {
        let result = ExecutionResult {
            status: ExecutionStatus {
                id: 3,
                description: None,
            },
            stdout: None,
            stderr: None,
            compile_output: None,
            time: Some("n/a".to_string()),
            memory: None,
        };
        assert_eq!(result.runtime_ms(), 0.0);
    }
}
