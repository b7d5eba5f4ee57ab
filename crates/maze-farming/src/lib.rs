// crates/maze-farming/src/lib.rs
//
// maze-farming: reward accrual, the lock/unlock/claim state machine, and
// delayed withdrawals for the Maze staking platform.
//
// Users lock $MAZE to earn a share of a reward reserve that decays
// geometrically at a daily rate. Unlocked principal and claimed reward are
// released through per-user FIFO queues after a delay.
//
// All amounts are in wei. Every operation takes the current unix time
// explicitly; the engine reads no clock.

pub mod accrual;
pub mod config;
pub mod events;
pub mod farming;
pub mod fixed_point;
pub mod pool;
pub mod position;
pub mod queue;
pub mod rate_history;
pub mod state;

pub use accrual::{accrue, segment_reward, Accrual, AccrualSegment};
pub use config::FarmingConfig;
pub use events::FarmingEvent;
pub use farming::{Farming, FarmingInfo, QueueKind, Role};
pub use fixed_point::{decay_factor, RATE_PRECISION, SECONDS_PER_DAY};
pub use pool::{RewardPool, StakeCheckpoint};
pub use position::{LockCheckpoint, StakePosition};
pub use queue::{DelayedWithdrawal, WithdrawalQueue};
pub use rate_history::{RateCheckpoint, RateHistory};
pub use state::FarmingState;
