// crates/maze-farming/src/events.rs
//
// Notifications emitted by committed operations, for off-chain audit and
// reconciliation. Failed operations emit nothing.

use serde::Serialize;

use maze_core::{Address, MazeError, Wei};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum FarmingEvent {
    DailyRateChanged {
        old_rate: u128,
        new_rate: u128,
        timestamp: u64,
    },
    MinLockPeriodChanged {
        old_period: u64,
        new_period: u64,
    },
    MinClaimGapChanged {
        old_gap: u64,
        new_gap: u64,
    },
    VestingChanged {
        old_vesting: Address,
        new_vesting: Address,
    },
    PoolFunded {
        amount: Wei,
        remaining: Wei,
        timestamp: u64,
    },
    Locked {
        user: Address,
        amount: Wei,
        principal: Wei,
        timestamp: u64,
    },
    LockedOnBehalf {
        vesting: Address,
        beneficiary: Address,
        amount: Wei,
        principal: Wei,
        timestamp: u64,
    },
    Unlocked {
        user: Address,
        amount: Wei,
        principal: Wei,
        maturity_time: u64,
        from_vesting: bool,
        timestamp: u64,
    },
    /// A claim was accepted but carried no reward; nothing was queued.
    ClaimAttempted {
        user: Address,
        timestamp: u64,
    },
    /// A reward amount was fixed and queued for delayed withdrawal.
    ClaimRecorded {
        user: Address,
        amount: Wei,
        maturity_time: u64,
        timestamp: u64,
    },
    DelayedUnlockWithdrawn {
        user: Address,
        amount: Wei,
        entries: usize,
        timestamp: u64,
    },
    DelayedClaimWithdrawn {
        user: Address,
        amount: Wei,
        entries: usize,
        timestamp: u64,
    },
}

impl FarmingEvent {
    /// Render the event as a single JSON object.
    pub fn to_json(&self) -> Result<String, MazeError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_tagged() {
        let event = FarmingEvent::ClaimAttempted {
            user: Address::repeat_byte(1),
            timestamp: 42,
        };
        let json = event.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "ClaimAttempted");
        assert_eq!(value["timestamp"], 42);
        assert_eq!(value["user"], format!("0x{}", "01".repeat(32)));
    }
}
