//! Submission evaluation
//!
//! Drives one submission through a problem's test cases in their fixed
//! order, short-circuiting on the first non-passing case. Executor
//! failures are absorbed into a runtime-error verdict and never bubble
//! to the caller; a submission always ends with exactly one terminal
//! verdict.

use tracing::{debug, warn};

use crate::{judge::CodeExecutor, models::TestCase};

use super::Verdict;

/// Aggregate outcome of evaluating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOutcome {
    pub verdict: Verdict,
    pub passed: i32,
    pub total: i32,
    /// Average runtime over passing cases, rounded to whole milliseconds
    pub avg_runtime_ms: i32,
    /// Average peak memory over passing cases, rounded to whole kilobytes
    pub avg_memory_kb: i32,
}

/// Per-test-case progression of the evaluation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EvalState {
    Running,
    Passed,
    Failed(Verdict),
}

/// Evaluate a submission against a problem's test cases.
///
/// Test cases run strictly sequentially: case N+1 is never sent to the
/// executor until case N has passed. A single non-accepted case fails the
/// whole submission and later cases are never run, which both economizes
/// engine calls and mirrors immediate-failure semantics.
///
/// Output comparison is exact string equality after trimming leading and
/// trailing whitespace on both sides; a mismatch overrides an accepted
/// engine status and yields a wrong-answer verdict.
///
/// A problem with zero test cases evaluates to accepted with zero passed.
/// That is long-standing behavior the rest of the platform relies on;
/// problem authoring is expected to guarantee at least one case.
pub async fn evaluate(
    executor: &dyn CodeExecutor,
    test_cases: &[TestCase],
    source_code: &str,
    language: &str,
) -> EvaluationOutcome {
    let mut state = EvalState::Running;
    let mut passed: i32 = 0;
    let mut total_runtime_ms: f64 = 0.0;
    let mut total_memory_kb: i64 = 0;

    for (index, test_case) in test_cases.iter().enumerate() {
        let result = match executor
            .execute(source_code, language, &test_case.input)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                warn!(case = index + 1, error = %e, "executor failed, aborting evaluation");
                state = EvalState::Failed(Verdict::RuntimeError);
                break;
            }
        };

        let verdict = Verdict::from_status_id(result.status.id);
        if !verdict.is_accepted() {
            debug!(case = index + 1, %verdict, "test case rejected by engine");
            state = EvalState::Failed(verdict);
            break;
        }

        let actual = result.stdout.as_deref().unwrap_or("").trim();
        let expected = test_case.expected_output.trim();
        if actual != expected {
            // The engine accepted the run, but the output is wrong for
            // this problem's expected answer.
            debug!(case = index + 1, "output mismatch");
            state = EvalState::Failed(Verdict::WrongAnswer);
            break;
        }

        passed += 1;
        total_runtime_ms += result.runtime_ms();
        total_memory_kb += result.memory_kb();
    }

    if state == EvalState::Running {
        state = EvalState::Passed;
    }

    let verdict = match state {
        EvalState::Passed => Verdict::Accepted,
        EvalState::Failed(v) => v,
        EvalState::Running => unreachable!(),
    };

    let (avg_runtime_ms, avg_memory_kb) = if passed > 0 {
        (
            (total_runtime_ms / passed as f64).round() as i32,
            ((total_memory_kb as f64) / passed as f64).round() as i32,
        )
    } else {
        (0, 0)
    };

    EvaluationOutcome {
        verdict,
        passed,
        total: test_cases.len() as i32,
        avg_runtime_ms,
        avg_memory_kb,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::judge::client::{ExecutionResult, ExecutionStatus, MockCodeExecutor};
    use crate::error::AppError;

    fn test_case(input: &str, expected_output: &str) -> TestCase {
        TestCase {
            id: Uuid::new_v4(),
            problem_id: Uuid::new_v4(),
            input: input.to_string(),
            expected_output: expected_output.to_string(),
            is_sample: false,
            ord: 0,
        }
    }

    fn engine_result(status_id: i32, stdout: &str, time: &str, memory: i64) -> ExecutionResult {
        ExecutionResult {
            status: ExecutionStatus {
                id: status_id,
                description: None,
            },
            stdout: Some(stdout.to_string()),
            stderr: None,
            compile_output: None,
            time: Some(time.to_string()),
            memory: Some(memory),
        }
    }

    #[tokio::test]
    async fn test_all_cases_pass() {
        let cases = vec![test_case("hello", "olleh"), test_case("world", "dlrow")];

        let mut executor = MockCodeExecutor::new();
        executor
            .expect_execute()
            .withf(|_, _, stdin| stdin == "hello")
            .times(1)
            .returning(|_, _, _| Ok(engine_result(3, "olleh", "0.010", 900)));
        executor
            .expect_execute()
            .withf(|_, _, stdin| stdin == "world")
            .times(1)
            .returning(|_, _, _| Ok(engine_result(3, "dlrow", "0.030", 1100)));

        let outcome = evaluate(&executor, &cases, "code", "python").await;

        assert_eq!(outcome.verdict, Verdict::Accepted);
        assert_eq!(outcome.passed, 2);
        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.avg_runtime_ms, 20);
        assert_eq!(outcome.avg_memory_kb, 1000);
    }

    #[tokio::test]
    async fn test_output_mismatch_short_circuits() {
        let cases = vec![test_case("hello", "olleh"), test_case("world", "dlrow")];

        // Engine reports accepted, but the output is wrong. The second
        // test case must never be sent to the executor.
        let mut executor = MockCodeExecutor::new();
        executor
            .expect_execute()
            .times(1)
            .returning(|_, _, _| Ok(engine_result(3, "olleh world", "0.010", 900)));

        let outcome = evaluate(&executor, &cases, "code", "python").await;

        assert_eq!(outcome.verdict, Verdict::WrongAnswer);
        assert_eq!(outcome.passed, 0);
        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.avg_runtime_ms, 0);
    }

    #[tokio::test]
    async fn test_trimmed_outputs_compare_equal() {
        let cases = vec![test_case("hello", "olleh\n")];

        let mut executor = MockCodeExecutor::new();
        executor
            .expect_execute()
            .times(1)
            .returning(|_, _, _| Ok(engine_result(3, "olleh", "0.010", 900)));

        let outcome = evaluate(&executor, &cases, "code", "python").await;

        assert_eq!(outcome.verdict, Verdict::Accepted);
        assert_eq!(outcome.passed, 1);
    }

    #[tokio::test]
    async fn test_engine_verdict_short_circuits() {
        let cases = vec![
            test_case("a", "1"),
            test_case("b", "2"),
            test_case("c", "3"),
        ];

        let mut executor = MockCodeExecutor::new();
        executor
            .expect_execute()
            .times(1)
            .returning(|_, _, _| Ok(engine_result(5, "", "2.000", 0)));

        let outcome = evaluate(&executor, &cases, "code", "cpp").await;

        assert_eq!(outcome.verdict, Verdict::TimeLimitExceeded);
        assert_eq!(outcome.passed, 0);
        assert_eq!(outcome.total, 3);
    }

    #[tokio::test]
    async fn test_executor_failure_becomes_runtime_error() {
        let cases = vec![test_case("a", "1"), test_case("b", "2")];

        let mut executor = MockCodeExecutor::new();
        executor
            .expect_execute()
            .times(1)
            .returning(|_, _, _| Err(AppError::ExecutionTimeout));

        let outcome = evaluate(&executor, &cases, "code", "java").await;

        assert_eq!(outcome.verdict, Verdict::RuntimeError);
        assert_eq!(outcome.passed, 0);
        assert_eq!(outcome.total, 2);
    }

    #[tokio::test]
    async fn test_failure_after_passing_cases_keeps_partial_metrics() {
        let cases = vec![test_case("a", "1"), test_case("b", "2")];

        let mut executor = MockCodeExecutor::new();
        executor
            .expect_execute()
            .withf(|_, _, stdin| stdin == "a")
            .times(1)
            .returning(|_, _, _| Ok(engine_result(3, "1", "0.050", 2000)));
        executor
            .expect_execute()
            .withf(|_, _, stdin| stdin == "b")
            .times(1)
            .returning(|_, _, _| Ok(engine_result(11, "", "0.001", 100)));

        let outcome = evaluate(&executor, &cases, "code", "c").await;

        assert_eq!(outcome.verdict, Verdict::RuntimeError);
        assert_eq!(outcome.passed, 1);
        // Averages come from passing cases only
        assert_eq!(outcome.avg_runtime_ms, 50);
        assert_eq!(outcome.avg_memory_kb, 2000);
    }

    #[tokio::test]
    async fn test_empty_test_case_list_is_accepted() {
        let executor = MockCodeExecutor::new();

        let outcome = evaluate(&executor, &[], "code", "python").await;

        assert_eq!(outcome.verdict, Verdict::Accepted);
        assert_eq!(outcome.passed, 0);
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.avg_runtime_ms, 0);
        assert_eq!(outcome.avg_memory_kb, 0);
    }
}
