// crates/maze-core/src/traits.rs
//
// Collaborator interfaces the staking engine needs from the outside world.
// The engine is generic over these; it never reaches a token or an access
// list through anything but these traits.

use crate::address::Address;
use crate::error::MazeError;
use crate::token::Wei;

/// Custody of the staked asset.
///
/// Implemented by `InMemoryToken` here; a chain-backed implementation would
/// wrap the token contract's transfer calls.
pub trait TokenLedger: Send + Sync {
    /// Pull `amount` from `from` into engine custody.
    ///
    /// Fails with `MazeError::Token` on insufficient balance or allowance.
    fn transfer_in(&mut self, from: &Address, amount: Wei) -> Result<(), MazeError>;

    /// Push `amount` out of engine custody to `to`.
    fn transfer_out(&mut self, to: &Address, amount: Wei) -> Result<(), MazeError>;
}

/// Blacklist and pause switch, owned by a separate access-control component.
pub trait AccessControl: Send + Sync {
    fn is_blacklisted(&self, account: &Address) -> bool;

    fn is_paused(&self) -> bool;
}
