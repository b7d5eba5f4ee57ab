// crates/maze-farming/src/position.rs
//
// Per-user stake position: principal, lock checkpoints, epoch and claim
// timestamps, and reward accrued but not yet claimed.

use serde::{Deserialize, Serialize};

use crate::queue::WithdrawalQueue;
use maze_core::Wei;

/// The user's principal from `timestamp` onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockCheckpoint {
    pub timestamp: u64,
    pub principal: Wei,
}

/// A single user's staking position.
///
/// Created implicitly on the first lock. `current_principal` only changes
/// inside lock/unlock, always together with a new `LockCheckpoint`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StakePosition {
    pub current_principal: Wei,
    /// Start of the current accrual epoch; 0 once the epoch has been claimed.
    pub farming_start: u64,
    /// Time of the last successful claim; 0 if never claimed.
    pub last_claim_time: u64,
    /// Reward flushed into the position and not yet claimed.
    pub accrued_reward: Wei,
    /// Instant up to which reward has been flushed.
    pub last_accrual: u64,
    /// Principal unlocked since `farming_start`.
    pub unlocked_in_epoch: Wei,
    lock_checkpoints: Vec<LockCheckpoint>,
    pub unlock_queue: WithdrawalQueue,
    pub claim_queue: WithdrawalQueue,
}

impl StakePosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock_checkpoints(&self) -> &[LockCheckpoint] {
        &self.lock_checkpoints
    }

    pub fn has_checkpoints(&self) -> bool {
        !self.lock_checkpoints.is_empty()
    }

    /// Set the principal and record the change. Only lock/unlock call this.
    pub(crate) fn set_principal(&mut self, principal: Wei, timestamp: u64) {
        self.current_principal = principal;
        match self.lock_checkpoints.last_mut() {
            Some(last) if last.timestamp == timestamp => last.principal = principal,
            _ => self.lock_checkpoints.push(LockCheckpoint {
                timestamp,
                principal,
            }),
        }
    }

    /// Principal in force at `timestamp`; zero before the first checkpoint.
    pub fn principal_at(&self, timestamp: u64) -> Wei {
        let idx = self
            .lock_checkpoints
            .partition_point(|c| c.timestamp <= timestamp);
        if idx == 0 {
            0
        } else {
            self.lock_checkpoints[idx - 1].principal
        }
    }

    /// Checkpoint timestamps strictly inside `(from, to)`.
    pub fn boundaries_within(&self, from: u64, to: u64) -> impl Iterator<Item = u64> + '_ {
        let start = self
            .lock_checkpoints
            .partition_point(|c| c.timestamp <= from);
        self.lock_checkpoints[start..]
            .iter()
            .map(|c| c.timestamp)
            .take_while(move |&ts| ts < to)
    }
}
