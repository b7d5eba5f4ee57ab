// crates/maze-core/src/memory.rs
//
// In-memory collaborators: a balance map standing in for the token contract
// and a blacklist/pause switch standing in for the access-control contract.
// Used by the engine's tests and by embedders that simulate the platform
// off-chain.

use std::collections::{HashMap, HashSet};

use crate::address::Address;
use crate::error::MazeError;
use crate::token::Wei;
use crate::traits::{AccessControl, TokenLedger};

/// Balances of external accounts plus the engine's own custody balance.
#[derive(Debug, Clone, Default)]
pub struct InMemoryToken {
    balances: HashMap<Address, Wei>,
    custody: Wei,
}

impl InMemoryToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `account` out of thin air (faucet for tests).
    pub fn mint(&mut self, account: &Address, amount: Wei) {
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    pub fn balance_of(&self, account: &Address) -> Wei {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Tokens currently held by the engine (principal plus reward reserve).
    pub fn custody(&self) -> Wei {
        self.custody
    }
}

impl TokenLedger for InMemoryToken {
    fn transfer_in(&mut self, from: &Address, amount: Wei) -> Result<(), MazeError> {
        let balance = self.balance_of(from);
        if balance < amount {
            return Err(MazeError::Token(format!(
                "insufficient funds: {} holds {} wei, {} wei required",
                from, balance, amount
            )));
        }
        let custody = self
            .custody
            .checked_add(amount)
            .ok_or_else(|| MazeError::overflow("token custody"))?;
        self.balances.insert(*from, balance - amount);
        self.custody = custody;
        Ok(())
    }

    fn transfer_out(&mut self, to: &Address, amount: Wei) -> Result<(), MazeError> {
        if self.custody < amount {
            return Err(MazeError::Token(format!(
                "insufficient funds: custody holds {} wei, {} wei requested",
                self.custody, amount
            )));
        }
        self.custody -= amount;
        self.mint(to, amount);
        Ok(())
    }
}

/// Owner-managed blacklist with a global pause switch.
#[derive(Debug, Clone)]
pub struct Blacklist {
    owner: Address,
    listed: HashSet<Address>,
    paused: bool,
}

impl Blacklist {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            listed: HashSet::new(),
            paused: false,
        }
    }

    fn ensure_owner(&self, caller: &Address) -> Result<(), MazeError> {
        if *caller != self.owner {
            return Err(MazeError::Permission("caller is not the owner".to_string()));
        }
        Ok(())
    }

    pub fn add(&mut self, caller: &Address, account: &Address) -> Result<(), MazeError> {
        self.ensure_owner(caller)?;
        account.ensure_non_zero("Account")?;
        if account == caller {
            return Err(MazeError::Validation("Cannot blacklist yourself".to_string()));
        }
        if !self.listed.insert(*account) {
            return Err(MazeError::State("Account already in blacklist".to_string()));
        }
        tracing::info!("Blacklisted {}", account);
        Ok(())
    }

    pub fn remove(&mut self, caller: &Address, account: &Address) -> Result<(), MazeError> {
        self.ensure_owner(caller)?;
        if !self.listed.remove(account) {
            return Err(MazeError::State("Account not in blacklist".to_string()));
        }
        tracing::info!("Removed {} from blacklist", account);
        Ok(())
    }

    pub fn pause(&mut self, caller: &Address) -> Result<(), MazeError> {
        self.ensure_owner(caller)?;
        self.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Address) -> Result<(), MazeError> {
        self.ensure_owner(caller)?;
        self.paused = false;
        Ok(())
    }
}

impl AccessControl for Blacklist {
    fn is_blacklisted(&self, account: &Address) -> bool {
        self.listed.contains(account)
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
