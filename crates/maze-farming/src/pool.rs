// crates/maze-farming/src/pool.rs
//
// Global reward reserve and total-staked bookkeeping.
//
// The reserve only grows through an explicit funding call and only shrinks
// by reward attributed to positions during accrual. Total staked is kept as
// a checkpoint history so the accrual walk can see how the denominator
// changed while a position was farming.

use serde::{Deserialize, Serialize};

use maze_core::{MazeError, Wei};

/// Total staked principal from `timestamp` onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeCheckpoint {
    pub timestamp: u64,
    pub total_staked: Wei,
}

/// The shared reward reserve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewardPool {
    /// Sum of all funding calls, in wei.
    funded: Wei,
    /// Reward attributed to positions so far, in wei.
    distributed: Wei,
    total_staked: Wei,
    stake_history: Vec<StakeCheckpoint>,
}

impl RewardPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Undistributed balance of the reserve.
    pub fn remaining(&self) -> Wei {
        self.funded - self.distributed
    }

    pub fn funded(&self) -> Wei {
        self.funded
    }

    pub fn distributed(&self) -> Wei {
        self.distributed
    }

    pub fn total_staked(&self) -> Wei {
        self.total_staked
    }

    /// Funded total after adding `amount` to the reserve.
    pub fn check_fund(&self, amount: Wei) -> Result<Wei, MazeError> {
        self.funded
            .checked_add(amount)
            .ok_or_else(|| MazeError::overflow("pool funding"))
    }

    /// Record a funded total produced by `check_fund`.
    pub(crate) fn commit_funding(&mut self, funded: Wei) {
        self.funded = funded;
    }

    /// Distributed total after moving `amount` from the reserve to a position.
    ///
    /// # Errors
    /// Returns `MazeError::Arithmetic` if the reserve holds less than `amount`.
    pub fn check_attribute(&self, amount: Wei) -> Result<Wei, MazeError> {
        if amount > self.remaining() {
            return Err(MazeError::Arithmetic(format!(
                "attributing {} wei from a pool holding {} wei",
                amount,
                self.remaining()
            )));
        }
        Ok(self.distributed + amount)
    }

    /// Record a distributed total produced by `check_attribute`.
    pub(crate) fn commit_attribution(&mut self, distributed: Wei) {
        self.distributed = distributed;
    }

    /// Set the total staked and record the change.
    pub(crate) fn set_total_staked(&mut self, total: Wei, timestamp: u64) {
        self.total_staked = total;
        match self.stake_history.last_mut() {
            Some(last) if last.timestamp == timestamp => last.total_staked = total,
            _ => self.stake_history.push(StakeCheckpoint {
                timestamp,
                total_staked: total,
            }),
        }
    }

    /// Total staked in force at `timestamp`; zero before the first stake.
    pub fn total_staked_at(&self, timestamp: u64) -> Wei {
        let idx = self
            .stake_history
            .partition_point(|c| c.timestamp <= timestamp);
        if idx == 0 {
            0
        } else {
            self.stake_history[idx - 1].total_staked
        }
    }

    /// Checkpoint timestamps strictly inside `(from, to)`.
    pub fn boundaries_within(&self, from: u64, to: u64) -> impl Iterator<Item = u64> + '_ {
        let start = self.stake_history.partition_point(|c| c.timestamp <= from);
        self.stake_history[start..]
            .iter()
            .map(|c| c.timestamp)
            .take_while(move |&ts| ts < to)
    }

    pub fn stake_history(&self) -> &[StakeCheckpoint] {
        &self.stake_history
    }
}
