//! Streak and progress updates
//!
//! Computes the new solving streak and progress counters when a user
//! earns their first accepted submission for a problem. Pure computation;
//! the caller persists the result under a per-user row lock.

use chrono::{DateTime, Utc};

use crate::models::UserProgress;

/// Streak service for progress bookkeeping
pub struct StreakService;

impl StreakService {
    /// Compute updated progress for a first acceptance at `now`.
    ///
    /// The streak counts consecutive calendar days with at least one
    /// first acceptance: a repeat on the same day keeps the streak, the
    /// next day extends it, any larger gap (or a clock running backwards)
    /// resets it to 1.
    pub fn record_first_acceptance(prior: &UserProgress, now: DateTime<Utc>) -> UserProgress {
        let today = now.date_naive();

        let new_streak = match prior.last_solved_at {
            None => 1,
            Some(last) => {
                let diff_days = (today - last.date_naive()).num_days();
                match diff_days {
                    0 => prior.current_streak,
                    1 => prior.current_streak + 1,
                    _ => 1,
                }
            }
        };

        UserProgress {
            problems_solved: prior.problems_solved + 1,
            current_streak: new_streak,
            longest_streak: prior.longest_streak.max(new_streak),
            last_solved_at: Some(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn progress(
        problems_solved: i32,
        current_streak: i32,
        longest_streak: i32,
        last_solved_at: Option<DateTime<Utc>>,
    ) -> UserProgress {
        UserProgress {
            problems_solved,
            current_streak,
            longest_streak,
            last_solved_at,
        }
    }

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_first_ever_acceptance_starts_streak() {
        let now = noon(2026, 3, 10);
        let updated = StreakService::record_first_acceptance(&progress(0, 0, 0, None), now);

        assert_eq!(updated.problems_solved, 1);
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.longest_streak, 1);
        assert_eq!(updated.last_solved_at, Some(now));
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        let now = noon(2026, 3, 10);
        let prior = progress(7, 3, 5, Some(noon(2026, 3, 9)));

        let updated = StreakService::record_first_acceptance(&prior, now);

        assert_eq!(updated.current_streak, 4);
        assert_eq!(updated.longest_streak, 5);
        assert_eq!(updated.problems_solved, 8);
    }

    #[test]
    fn test_gap_resets_streak() {
        let now = noon(2026, 3, 10);
        let prior = progress(7, 3, 5, Some(noon(2026, 3, 7)));

        let updated = StreakService::record_first_acceptance(&prior, now);

        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.longest_streak, 5);
    }

    #[test]
    fn test_same_day_keeps_streak() {
        let now = noon(2026, 3, 10);
        let prior = progress(7, 3, 5, Some(noon(2026, 3, 10) - Duration::hours(4)));

        let updated = StreakService::record_first_acceptance(&prior, now);

        assert_eq!(updated.current_streak, 3);
        assert_eq!(updated.longest_streak, 5);
        assert_eq!(updated.problems_solved, 8);
    }

    #[test]
    fn test_calendar_days_not_elapsed_hours() {
        // 23:30 yesterday to 00:30 today is one hour apart but still a
        // consecutive calendar day
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 0, 30, 0).unwrap();
        let prior = progress(
            1,
            1,
            1,
            Some(Utc.with_ymd_and_hms(2026, 3, 9, 23, 30, 0).unwrap()),
        );

        let updated = StreakService::record_first_acceptance(&prior, now);

        assert_eq!(updated.current_streak, 2);
    }

    #[test]
    fn test_clock_skew_resets_streak() {
        let now = noon(2026, 3, 10);
        let prior = progress(7, 3, 5, Some(noon(2026, 3, 12)));

        let updated = StreakService::record_first_acceptance(&prior, now);

        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.longest_streak, 5);
    }

    #[test]
    fn test_longest_streak_tracks_new_peak() {
        let now = noon(2026, 3, 10);
        let prior = progress(7, 5, 5, Some(noon(2026, 3, 9)));

        let updated = StreakService::record_first_acceptance(&prior, now);

        assert_eq!(updated.current_streak, 6);
        assert_eq!(updated.longest_streak, 6);
        assert!(updated.longest_streak >= updated.current_streak);
    }
}
