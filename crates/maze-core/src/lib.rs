// crates/maze-core/src/lib.rs
//
// maze-core: Core types, errors, and collaborator traits for the Maze
// staking platform.
//
// This is the leaf crate of the workspace. It defines account addresses,
// token units, the protocol error type, and the interfaces through which
// the farming engine reaches the token and access-control components.

pub mod address;
pub mod error;
pub mod memory;
pub mod token;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use maze_core::Address;`
pub use address::Address;
pub use error::MazeError;
pub use memory::{Blacklist, InMemoryToken};
pub use token::{Maze, Wei, DECIMALS, WEI_PER_MAZE};
pub use traits::{AccessControl, TokenLedger};
