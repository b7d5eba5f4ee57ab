// crates/maze-farming/src/rate_history.rs
//
// Append-only log of daily-rate changes. The accrual walk reads it to find
// the rate in force on every sub-interval.

use serde::{Deserialize, Serialize};

use crate::fixed_point::RATE_PRECISION;
use maze_core::MazeError;

/// A daily rate in force from `timestamp` onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCheckpoint {
    pub timestamp: u64,
    /// Fraction of the remaining pool released per day, on `RATE_PRECISION`.
    pub daily_rate: u128,
}

/// Global history of daily rates, ordered by timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateHistory {
    checkpoints: Vec<RateCheckpoint>,
}

impl RateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a history with `daily_rate` in force from `timestamp`.
    pub fn with_initial(daily_rate: u128, timestamp: u64) -> Result<Self, MazeError> {
        let mut history = Self::new();
        history.append_rate(daily_rate, timestamp)?;
        Ok(history)
    }

    /// Record a new rate in force from `timestamp`.
    ///
    /// Returns `Ok(false)` without touching the history when the rate equals
    /// the one already in force. A second change within the same second
    /// replaces the last checkpoint instead of opening an empty interval.
    ///
    /// # Errors
    /// `Validation` if the rate is not below 1, `State` if `timestamp`
    /// predates the last checkpoint.
    pub fn append_rate(&mut self, daily_rate: u128, timestamp: u64) -> Result<bool, MazeError> {
        if daily_rate >= RATE_PRECISION {
            return Err(MazeError::Validation(format!(
                "daily rate {} out of range [0, {})",
                daily_rate, RATE_PRECISION
            )));
        }
        match self.checkpoints.last_mut() {
            Some(last) if timestamp < last.timestamp => Err(MazeError::State(format!(
                "rate checkpoint at {} predates the last one at {}",
                timestamp, last.timestamp
            ))),
            Some(last) if last.daily_rate == daily_rate => Ok(false),
            Some(last) if last.timestamp == timestamp => {
                last.daily_rate = daily_rate;
                Ok(true)
            }
            _ => {
                self.checkpoints.push(RateCheckpoint {
                    timestamp,
                    daily_rate,
                });
                Ok(true)
            }
        }
    }

    /// The rate in force at `timestamp`; zero before the first checkpoint.
    pub fn rate_at(&self, timestamp: u64) -> u128 {
        let idx = self.checkpoints.partition_point(|c| c.timestamp <= timestamp);
        if idx == 0 {
            0
        } else {
            self.checkpoints[idx - 1].daily_rate
        }
    }

    /// The rate currently in force.
    pub fn current(&self) -> u128 {
        self.checkpoints.last().map(|c| c.daily_rate).unwrap_or(0)
    }

    /// Checkpoint timestamps strictly inside `(from, to)`.
    pub fn boundaries_within(&self, from: u64, to: u64) -> impl Iterator<Item = u64> + '_ {
        let start = self.checkpoints.partition_point(|c| c.timestamp <= from);
        self.checkpoints[start..]
            .iter()
            .map(|c| c.timestamp)
            .take_while(move |&ts| ts < to)
    }

    pub fn checkpoints(&self) -> &[RateCheckpoint] {
        &self.checkpoints
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_at_before_and_after_changes() {
        let mut history = RateHistory::with_initial(300, 100).unwrap();
        history.append_rate(900, 200).unwrap();

        assert_eq!(history.rate_at(99), 0);
        assert_eq!(history.rate_at(100), 300);
        assert_eq!(history.rate_at(199), 300);
        assert_eq!(history.rate_at(200), 900);
        assert_eq!(history.rate_at(10_000), 900);
        assert_eq!(history.current(), 900);
    }

    #[test]
    fn test_identical_rate_is_noop() {
        let mut history = RateHistory::with_initial(300, 100).unwrap();
        assert!(!history.append_rate(300, 500).unwrap());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_same_second_change_overwrites() {
        let mut history = RateHistory::with_initial(300, 100).unwrap();
        history.append_rate(400, 200).unwrap();
        history.append_rate(500, 200).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.rate_at(200), 500);
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        let mut history = RateHistory::new();
        assert!(matches!(
            history.append_rate(RATE_PRECISION, 1),
            Err(MazeError::Validation(_))
        ));
        assert!(history.is_empty());
    }

    #[test]
    fn test_rejects_time_travel() {
        let mut history = RateHistory::with_initial(300, 100).unwrap();
        assert!(matches!(history.append_rate(1, 50), Err(MazeError::State(_))));
    }

    #[test]
    fn test_boundaries_within_is_exclusive() {
        let mut history = RateHistory::with_initial(1, 0).unwrap();
        history.append_rate(2, 10).unwrap();
        history.append_rate(3, 20).unwrap();
        history.append_rate(4, 30).unwrap();

        let inner: Vec<u64> = history.boundaries_within(10, 30).collect();
        assert_eq!(inner, vec![20]);
        let all: Vec<u64> = history.boundaries_within(0, 100).collect();
        assert_eq!(all, vec![10, 20, 30]);
    }
}
