// crates/maze-core/src/token.rs
//
// $MAZE token amount type and unit constants.
//
// The smallest unit of $MAZE is the "wei". 1 MAZE = 10^18 wei. All staking
// and reward accounting is carried out in integer wei; the `Maze` wrapper
// only exists for display and for building amounts in tests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimals of the staked asset.
pub const DECIMALS: u32 = 18;

/// Number of wei in one MAZE.
pub const WEI_PER_MAZE: u128 = 1_000_000_000_000_000_000;

/// Type alias for wei, the smallest unit of $MAZE.
pub type Wei = u128;

/// A $MAZE amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Maze {
    /// Amount in wei.
    pub wei: Wei,
}

impl Maze {
    /// Whole-token amount.
    ///
    /// # Example
    /// ```
    /// use maze_core::token::{Maze, WEI_PER_MAZE};
    /// assert_eq!(Maze::from_maze(8).wei, 8 * WEI_PER_MAZE);
    /// ```
    pub fn from_maze(whole: u128) -> Self {
        Self {
            wei: whole.saturating_mul(WEI_PER_MAZE),
        }
    }

    pub fn from_wei(wei: Wei) -> Self {
        Self { wei }
    }

    pub fn zero() -> Self {
        Self { wei: 0 }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.wei / WEI_PER_MAZE;
        let frac = self.wei % WEI_PER_MAZE;
        if frac == 0 {
            write!(f, "{} MAZE", whole)
        } else {
            let frac_str = format!("{:018}", frac);
            let trimmed = frac_str.trim_end_matches('0');
            write!(f, "{}.{} MAZE", whole, trimmed)
        }
    }
}
