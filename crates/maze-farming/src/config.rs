// crates/maze-farming/src/config.rs
//
// Tunables of the farming engine. Loaded from a TOML file or populated with
// the deployment defaults.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::fixed_point::{RATE_PRECISION, SECONDS_PER_DAY};
use maze_core::{Address, MazeError};

/// Engine configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FarmingConfig {
    /// Account allowed to call the admin interface.
    pub owner: Address,

    /// The vesting component; sole caller of lock-on-behalf and unlock-from-vesting.
    pub vesting: Address,

    /// Initial daily rate on a scale of 100_000 (300 == 0.3% per day).
    #[serde(default = "default_daily_rate")]
    pub daily_rate: u128,

    /// Seconds between the start of farming and the first permitted unlock.
    #[serde(default = "default_min_lock_period")]
    pub min_lock_period: u64,

    /// Seconds between two claims of the same account.
    #[serde(default = "default_min_claim_gap")]
    pub min_claim_gap: u64,

    /// Seconds an unlocked amount waits before it can be withdrawn.
    #[serde(default = "default_unlock_delay")]
    pub unlock_delay: u64,

    /// Seconds a claimed reward waits before it can be withdrawn.
    #[serde(default = "default_claim_delay")]
    pub claim_delay: u64,
}

fn default_daily_rate() -> u128 {
    300
}

fn default_min_lock_period() -> u64 {
    30 * SECONDS_PER_DAY
}

fn default_min_claim_gap() -> u64 {
    365 * SECONDS_PER_DAY
}

fn default_unlock_delay() -> u64 {
    SECONDS_PER_DAY
}

fn default_claim_delay() -> u64 {
    SECONDS_PER_DAY
}

impl FarmingConfig {
    /// Defaults for everything but the two privileged addresses.
    pub fn new(owner: Address, vesting: Address) -> Self {
        Self {
            owner,
            vesting,
            daily_rate: default_daily_rate(),
            min_lock_period: default_min_lock_period(),
            min_claim_gap: default_min_claim_gap(),
            unlock_delay: default_unlock_delay(),
            claim_delay: default_claim_delay(),
        }
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, MazeError> {
        let config: FarmingConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero or shared privileged addresses, an out-of-range rate, and
    /// zero durations.
    pub fn validate(&self) -> Result<(), MazeError> {
        self.owner.ensure_non_zero("Owner")?;
        self.vesting.ensure_non_zero("Vesting")?;
        if self.owner == self.vesting {
            return Err(MazeError::Validation(
                "owner and vesting must be different addresses".to_string(),
            ));
        }
        if self.daily_rate >= RATE_PRECISION {
            return Err(MazeError::Validation(format!(
                "daily rate {} out of range [0, {})",
                self.daily_rate, RATE_PRECISION
            )));
        }
        for (name, value) in [
            ("min_lock_period", self.min_lock_period),
            ("min_claim_gap", self.min_claim_gap),
            ("unlock_delay", self.unlock_delay),
            ("claim_delay", self.claim_delay),
        ] {
            if value == 0 {
                return Err(MazeError::Validation(format!("{} cannot be zero", name)));
            }
        }
        Ok(())
    }
}
