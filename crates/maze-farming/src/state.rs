// crates/maze-farming/src/state.rs
//
// Per-user farming lifecycle, derived from the position:
//   Empty -> Farming -> {PartiallyUnlocked, FullyUnlocked} -> Claimable
//         -> Claimed -> (lock) Farming ...

use serde::Serialize;
use std::fmt;

use crate::position::StakePosition;

/// Where a user stands in the lock/unlock/claim cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FarmingState {
    /// Never locked, nothing to claim.
    Empty,
    /// Principal locked, nothing unlocked in this epoch.
    Farming,
    /// Principal locked, part of it already unlocked in this epoch.
    PartiallyUnlocked,
    /// Everything unlocked; claim gap not yet elapsed.
    FullyUnlocked,
    /// Everything unlocked and a claim is permitted.
    Claimable,
    /// Epoch claimed; a new lock starts the next one.
    Claimed,
}

impl FarmingState {
    /// Derive the state of `position` at `now`, given the claim gap in force.
    pub fn of(position: &StakePosition, min_claim_gap: u64, now: u64) -> Self {
        if position.current_principal > 0 {
            return if position.unlocked_in_epoch > 0 {
                FarmingState::PartiallyUnlocked
            } else {
                FarmingState::Farming
            };
        }
        if position.farming_start == 0 {
            return if position.last_claim_time == 0 {
                FarmingState::Empty
            } else {
                FarmingState::Claimed
            };
        }
        let gap_elapsed = position.last_claim_time == 0
            || now >= position.last_claim_time.saturating_add(min_claim_gap);
        if gap_elapsed {
            FarmingState::Claimable
        } else {
            FarmingState::FullyUnlocked
        }
    }
}

impl fmt::Display for FarmingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FarmingState::Empty => write!(f, "Empty"),
            FarmingState::Farming => write!(f, "Farming"),
            FarmingState::PartiallyUnlocked => write!(f, "PartiallyUnlocked"),
            FarmingState::FullyUnlocked => write!(f, "FullyUnlocked"),
            FarmingState::Claimable => write!(f, "Claimable"),
            FarmingState::Claimed => write!(f, "Claimed"),
        }
    }
}
