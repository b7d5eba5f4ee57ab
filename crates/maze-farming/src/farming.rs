// crates/maze-farming/src/farming.rs
//
// The farming state machine: lock, unlock, claim, and delayed withdrawal,
// plus the owner's admin interface.
//
// Every operation follows the same shape:
//   1. check caller role, pause/blacklist, timestamp order, and input
//      preconditions;
//   2. compute the accrual flush and every new value with checked math;
//   3. perform the single fallible collaborator call (token transfer);
//   4. commit the precomputed values.
// A failure in steps 1-3 leaves the ledger untouched.

use std::collections::HashMap;

use serde::Serialize;

use crate::accrual::{accrue, Accrual};
use crate::config::FarmingConfig;
use crate::events::FarmingEvent;
use crate::fixed_point::RATE_PRECISION;
use crate::pool::RewardPool;
use crate::position::StakePosition;
use crate::queue::{DelayedWithdrawal, WithdrawalPlan, WithdrawalQueue};
use crate::rate_history::RateHistory;
use crate::state::FarmingState;
use maze_core::{AccessControl, Address, Maze, MazeError, TokenLedger, Wei};

/// Privilege of a caller, resolved at the boundary of each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Vesting,
    Account,
}

/// Which of a user's two delayed-withdrawal queues an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKind {
    Unlock,
    Claim,
}

impl QueueKind {
    fn of(self, position: &StakePosition) -> &WithdrawalQueue {
        match self {
            QueueKind::Unlock => &position.unlock_queue,
            QueueKind::Claim => &position.claim_queue,
        }
    }

    fn of_mut(self, position: &mut StakePosition) -> &mut WithdrawalQueue {
        match self {
            QueueKind::Unlock => &mut position.unlock_queue,
            QueueKind::Claim => &mut position.claim_queue,
        }
    }
}

/// Summary of a user's current epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FarmingInfo {
    pub locked_amount: Wei,
    pub start_time: u64,
    /// Time of the last claim; 0 while the epoch has not been claimed.
    pub end_time: u64,
    /// Reward accrued so far, including the not-yet-flushed part.
    pub reward: Wei,
}

/// The staking engine. Owns the ledger and the collaborators it talks to.
pub struct Farming<T: TokenLedger, A: AccessControl> {
    config: FarmingConfig,
    rates: RateHistory,
    pool: RewardPool,
    positions: HashMap<Address, StakePosition>,
    token: T,
    access: A,
    events: Vec<FarmingEvent>,
    /// Latest timestamp any operation has committed at. Time-indexed state
    /// (rate, principal and total-staked histories) only grows forward.
    last_update: u64,
}

impl<T: TokenLedger, A: AccessControl> Farming<T, A> {
    /// Create an engine with the configured rate in force from `now`.
    ///
    /// # Errors
    /// `MazeError::Validation` if the configuration is invalid.
    pub fn new(config: FarmingConfig, token: T, access: A, now: u64) -> Result<Self, MazeError> {
        config.validate()?;
        let rates = RateHistory::with_initial(config.daily_rate, now)?;
        tracing::info!(
            "Farming initialized: daily rate {}/{}, min lock {}s, min claim gap {}s",
            config.daily_rate,
            RATE_PRECISION,
            config.min_lock_period,
            config.min_claim_gap
        );
        Ok(Self {
            config,
            rates,
            pool: RewardPool::new(),
            positions: HashMap::new(),
            token,
            access,
            events: Vec::new(),
            last_update: now,
        })
    }

    // -----------------------------------------------------------------------
    // Boundary checks
    // -----------------------------------------------------------------------

    pub fn role_of(&self, caller: &Address) -> Role {
        if *caller == self.config.owner {
            Role::Owner
        } else if *caller == self.config.vesting {
            Role::Vesting
        } else {
            Role::Account
        }
    }

    fn require_owner(&self, caller: &Address) -> Result<(), MazeError> {
        match self.role_of(caller) {
            Role::Owner => Ok(()),
            _ => Err(MazeError::Permission("caller is not the owner".to_string())),
        }
    }

    fn require_vesting(&self, caller: &Address) -> Result<(), MazeError> {
        match self.role_of(caller) {
            Role::Vesting => Ok(()),
            _ => Err(MazeError::Permission(
                "caller is not the vesting contract".to_string(),
            )),
        }
    }

    fn ensure_not_paused(&self) -> Result<(), MazeError> {
        if self.access.is_paused() {
            return Err(MazeError::Permission("system is paused".to_string()));
        }
        Ok(())
    }

    fn ensure_active(&self, account: &Address) -> Result<(), MazeError> {
        self.ensure_not_paused()?;
        if self.access.is_blacklisted(account) {
            return Err(MazeError::Permission("account is blacklisted".to_string()));
        }
        Ok(())
    }

    fn ensure_in_order(&self, now: u64) -> Result<(), MazeError> {
        if now < self.last_update {
            return Err(MazeError::State(format!(
                "timestamp {} predates last update at {}",
                now, self.last_update
            )));
        }
        Ok(())
    }

    /// Reward accrued by `user` since the last flush, against the current pool.
    fn preview_accrual(&self, user: &Address, now: u64) -> Result<Accrual, MazeError> {
        match self.positions.get(user) {
            Some(position) if now > position.last_accrual => accrue(
                &self.rates,
                &self.pool,
                position,
                position.last_accrual,
                now,
                self.pool.remaining(),
            ),
            _ => Ok(Accrual {
                earned: 0,
                pool_after: self.pool.remaining(),
                segments: Vec::new(),
            }),
        }
    }

    fn accrued_after(&self, user: &Address, accrual: &Accrual) -> Result<Wei, MazeError> {
        let current = self
            .positions
            .get(user)
            .map(|p| p.accrued_reward)
            .unwrap_or(0);
        current
            .checked_add(accrual.earned)
            .ok_or_else(|| MazeError::overflow("accrued reward"))
    }

    fn emit(&mut self, event: FarmingEvent) {
        self.events.push(event);
    }

    // -----------------------------------------------------------------------
    // Lock
    // -----------------------------------------------------------------------

    /// Lock `amount` of the caller's tokens and start or continue farming.
    pub fn lock(&mut self, user: &Address, amount: Wei, now: u64) -> Result<(), MazeError> {
        self.lock_internal(user, user, amount, now, false)
            .inspect_err(|e| tracing::warn!("lock by {} rejected: {}", user, e))
    }

    /// Lock tokens supplied by the vesting contract on behalf of `beneficiary`.
    pub fn lock_on_behalf(
        &mut self,
        caller: &Address,
        beneficiary: &Address,
        amount: Wei,
        now: u64,
    ) -> Result<(), MazeError> {
        self.require_vesting(caller)
            .and_then(|_| self.lock_internal(caller, beneficiary, amount, now, true))
            .inspect_err(|e| {
                tracing::warn!("lock on behalf of {} rejected: {}", beneficiary, e)
            })
    }

    fn lock_internal(
        &mut self,
        payer: &Address,
        beneficiary: &Address,
        amount: Wei,
        now: u64,
        on_behalf: bool,
    ) -> Result<(), MazeError> {
        beneficiary.ensure_non_zero("User")?;
        if amount == 0 {
            return Err(MazeError::Validation("amount cannot be zero".to_string()));
        }
        self.ensure_active(payer)?;
        self.ensure_active(beneficiary)?;
        self.ensure_in_order(now)?;

        let accrual = self.preview_accrual(beneficiary, now)?;
        let accrued = self.accrued_after(beneficiary, &accrual)?;
        let old_principal = self
            .positions
            .get(beneficiary)
            .map(|p| p.current_principal)
            .unwrap_or(0);
        let new_principal = old_principal
            .checked_add(amount)
            .ok_or_else(|| MazeError::overflow("principal"))?;
        let new_total = self
            .pool
            .total_staked()
            .checked_add(amount)
            .ok_or_else(|| MazeError::overflow("total staked"))?;
        let distributed = self.pool.check_attribute(accrual.earned)?;

        self.token.transfer_in(payer, amount)?;

        self.pool.commit_attribution(distributed);
        self.last_update = now;
        let position = self.positions.entry(*beneficiary).or_default();
        position.accrued_reward = accrued;
        position.last_accrual = now;
        if old_principal == 0 {
            position.farming_start = now;
            position.unlocked_in_epoch = 0;
        }
        position.set_principal(new_principal, now);
        self.pool.set_total_staked(new_total, now);

        tracing::info!(
            "Locked {} for {} (principal {}, total staked {})",
            Maze::from_wei(amount),
            beneficiary,
            Maze::from_wei(new_principal),
            Maze::from_wei(new_total)
        );
        let event = if !on_behalf {
            FarmingEvent::Locked {
                user: *beneficiary,
                amount,
                principal: new_principal,
                timestamp: now,
            }
        } else {
            FarmingEvent::LockedOnBehalf {
                vesting: *payer,
                beneficiary: *beneficiary,
                amount,
                principal: new_principal,
                timestamp: now,
            }
        };
        self.emit(event);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Unlock
    // -----------------------------------------------------------------------

    /// Unlock `amount` of principal into the delayed-unlock queue.
    pub fn unlock(&mut self, user: &Address, amount: Wei, now: u64) -> Result<(), MazeError> {
        self.unlock_internal(user, amount, now, false)
            .inspect_err(|e| tracing::warn!("unlock by {} rejected: {}", user, e))
    }

    /// Unlock the whole principal.
    pub fn unlock_all(&mut self, user: &Address, now: u64) -> Result<(), MazeError> {
        let principal = self
            .positions
            .get(user)
            .map(|p| p.current_principal)
            .unwrap_or(0);
        if principal == 0 {
            let err = MazeError::State("no principal to unlock".to_string());
            tracing::warn!("unlock all by {} rejected: {}", user, err);
            return Err(err);
        }
        self.unlock(user, principal, now)
    }

    /// Unlock on behalf of `beneficiary`; only the vesting contract may call
    /// this, and the minimum lock period does not apply.
    pub fn unlock_from_vesting(
        &mut self,
        caller: &Address,
        beneficiary: &Address,
        amount: Wei,
        now: u64,
    ) -> Result<(), MazeError> {
        self.require_vesting(caller)
            .and_then(|_| self.ensure_active(caller))
            .and_then(|_| self.unlock_internal(beneficiary, amount, now, true))
            .inspect_err(|e| {
                tracing::warn!("unlock from vesting for {} rejected: {}", beneficiary, e)
            })
    }

    fn unlock_internal(
        &mut self,
        user: &Address,
        amount: Wei,
        now: u64,
        from_vesting: bool,
    ) -> Result<(), MazeError> {
        user.ensure_non_zero("User")?;
        if amount == 0 {
            return Err(MazeError::Validation("amount cannot be zero".to_string()));
        }
        self.ensure_active(user)?;
        self.ensure_in_order(now)?;

        let (principal, farming_start) = match self.positions.get(user) {
            Some(p) if p.current_principal > 0 => (p.current_principal, p.farming_start),
            _ => return Err(MazeError::State("no principal to unlock".to_string())),
        };
        if amount > principal {
            return Err(MazeError::State(format!(
                "unlock amount {} exceeds locked principal {}",
                amount, principal
            )));
        }
        if !from_vesting && now < farming_start.saturating_add(self.config.min_lock_period) {
            return Err(MazeError::State(format!(
                "minimum lock period not reached: unlock allowed from {}",
                farming_start.saturating_add(self.config.min_lock_period)
            )));
        }

        let accrual = self.preview_accrual(user, now)?;
        let accrued = self.accrued_after(user, &accrual)?;
        let new_principal = principal - amount;
        let new_total = self
            .pool
            .total_staked()
            .checked_sub(amount)
            .ok_or_else(|| MazeError::Arithmetic("total staked underflow".to_string()))?;
        let distributed = self.pool.check_attribute(accrual.earned)?;
        let unlock_delay = self.config.unlock_delay;

        let position = self
            .positions
            .get_mut(user)
            .ok_or_else(|| MazeError::State("no principal to unlock".to_string()))?;
        let maturity_time = position.unlock_queue.enqueue(amount, now, unlock_delay)?;
        position.accrued_reward = accrued;
        position.last_accrual = now;
        position.unlocked_in_epoch = position.unlocked_in_epoch.saturating_add(amount);
        position.set_principal(new_principal, now);
        self.pool.commit_attribution(distributed);
        self.pool.set_total_staked(new_total, now);
        self.last_update = now;

        tracing::info!(
            "Unlocked {} for {} (principal {}, withdrawable at {})",
            Maze::from_wei(amount),
            user,
            Maze::from_wei(new_principal),
            maturity_time
        );
        self.emit(FarmingEvent::Unlocked {
            user: *user,
            amount,
            principal: new_principal,
            maturity_time,
            from_vesting,
            timestamp: now,
        });
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Claim
    // -----------------------------------------------------------------------

    /// Fix the epoch's reward and queue it for delayed withdrawal.
    ///
    /// Returns the queued amount. A zero reward is accepted: it emits
    /// `ClaimAttempted`, queues nothing, and leaves the claim gap untouched.
    pub fn claim(&mut self, user: &Address, now: u64) -> Result<Wei, MazeError> {
        self.claim_internal(user, now)
            .inspect_err(|e| tracing::warn!("claim by {} rejected: {}", user, e))
    }

    fn claim_internal(&mut self, user: &Address, now: u64) -> Result<Wei, MazeError> {
        user.ensure_non_zero("User")?;
        self.ensure_active(user)?;
        self.ensure_in_order(now)?;

        let Some(position) = self.positions.get(user) else {
            tracing::info!("Claim by {} found no position", user);
            self.last_update = now;
            self.emit(FarmingEvent::ClaimAttempted {
                user: *user,
                timestamp: now,
            });
            return Ok(0);
        };
        if position.current_principal > 0 {
            return Err(MazeError::State(
                "unable to claim before full unlock".to_string(),
            ));
        }
        if position.last_claim_time != 0
            && now < position.last_claim_time.saturating_add(self.config.min_claim_gap)
        {
            return Err(MazeError::State(format!(
                "minimum claim gap not reached: next claim allowed from {}",
                position.last_claim_time.saturating_add(self.config.min_claim_gap)
            )));
        }

        let accrual = self.preview_accrual(user, now)?;
        let reward = self.accrued_after(user, &accrual)?;
        let distributed = self.pool.check_attribute(accrual.earned)?;
        let claim_delay = self.config.claim_delay;

        let position = self
            .positions
            .get_mut(user)
            .ok_or_else(|| MazeError::State("no farming position".to_string()))?;
        let maturity_time = if reward > 0 {
            Some(position.claim_queue.enqueue(reward, now, claim_delay)?)
        } else {
            None
        };
        position.accrued_reward = 0;
        position.last_accrual = now;
        position.farming_start = 0;
        position.unlocked_in_epoch = 0;
        if maturity_time.is_some() {
            position.last_claim_time = now;
        }
        self.pool.commit_attribution(distributed);
        self.last_update = now;

        match maturity_time {
            Some(maturity_time) => {
                tracing::info!(
                    "Claim of {} recorded for {}, withdrawable at {}",
                    Maze::from_wei(reward),
                    user,
                    maturity_time
                );
                self.emit(FarmingEvent::ClaimRecorded {
                    user: *user,
                    amount: reward,
                    maturity_time,
                    timestamp: now,
                });
            }
            None => {
                tracing::info!("Claim by {} carried no reward", user);
                self.emit(FarmingEvent::ClaimAttempted {
                    user: *user,
                    timestamp: now,
                });
            }
        }
        Ok(reward)
    }

    // -----------------------------------------------------------------------
    // Delayed withdrawals
    // -----------------------------------------------------------------------

    /// Pay out up to `max_count` matured unlock entries. Returns the amount sent.
    pub fn withdraw_delayed_unlock(
        &mut self,
        user: &Address,
        max_count: usize,
        now: u64,
    ) -> Result<Wei, MazeError> {
        self.withdraw_internal(QueueKind::Unlock, user, max_count, now)
    }

    /// Pay out up to `max_count` matured claim entries. Returns the amount sent.
    pub fn withdraw_delayed_claim(
        &mut self,
        user: &Address,
        max_count: usize,
        now: u64,
    ) -> Result<Wei, MazeError> {
        self.withdraw_internal(QueueKind::Claim, user, max_count, now)
    }

    fn withdraw_internal(
        &mut self,
        kind: QueueKind,
        user: &Address,
        max_count: usize,
        now: u64,
    ) -> Result<Wei, MazeError> {
        let plan = self
            .pay_matured(kind, user, max_count, now)
            .inspect_err(|e| {
                tracing::warn!("{:?} withdrawal by {} rejected: {}", kind, user, e)
            })?;

        tracing::info!(
            "Withdrew {} from {} delayed {:?} entries for {}",
            Maze::from_wei(plan.total),
            plan.indices.len(),
            kind,
            user
        );
        let event = match kind {
            QueueKind::Unlock => FarmingEvent::DelayedUnlockWithdrawn {
                user: *user,
                amount: plan.total,
                entries: plan.indices.len(),
                timestamp: now,
            },
            QueueKind::Claim => FarmingEvent::DelayedClaimWithdrawn {
                user: *user,
                amount: plan.total,
                entries: plan.indices.len(),
                timestamp: now,
            },
        };
        self.emit(event);
        Ok(plan.total)
    }

    /// Transfer the matured entries of one queue and mark them consumed.
    fn pay_matured(
        &mut self,
        kind: QueueKind,
        user: &Address,
        max_count: usize,
        now: u64,
    ) -> Result<WithdrawalPlan, MazeError> {
        user.ensure_non_zero("User")?;
        self.ensure_active(user)?;
        self.ensure_in_order(now)?;
        let position = self
            .positions
            .get(user)
            .ok_or_else(|| MazeError::State("nothing ready to withdraw".to_string()))?;
        let plan = kind.of(position).plan_withdrawal(max_count, now)?;

        self.token.transfer_out(user, plan.total)?;

        if let Some(position) = self.positions.get_mut(user) {
            kind.of_mut(position).commit(&plan);
        }
        self.last_update = now;
        Ok(plan)
    }

    // -----------------------------------------------------------------------
    // Admin
    // -----------------------------------------------------------------------

    /// Change the daily rate from `now` on. Setting the current rate is a no-op.
    pub fn set_daily_rate(&mut self, caller: &Address, rate: u128, now: u64) -> Result<(), MazeError> {
        self.require_owner(caller)?;
        self.ensure_not_paused()?;
        self.ensure_in_order(now)?;
        let old_rate = self.rates.current();
        if self.rates.append_rate(rate, now)? {
            self.last_update = now;
            tracing::info!("Daily rate changed from {} to {} at {}", old_rate, rate, now);
            self.emit(FarmingEvent::DailyRateChanged {
                old_rate,
                new_rate: rate,
                timestamp: now,
            });
        }
        Ok(())
    }

    pub fn set_min_lock_period(&mut self, caller: &Address, seconds: u64) -> Result<(), MazeError> {
        self.require_owner(caller)?;
        self.ensure_not_paused()?;
        if seconds == 0 {
            return Err(MazeError::Validation(
                "minimum lock period cannot be zero".to_string(),
            ));
        }
        let old_period = self.config.min_lock_period;
        self.config.min_lock_period = seconds;
        tracing::info!("Minimum lock period changed from {}s to {}s", old_period, seconds);
        self.emit(FarmingEvent::MinLockPeriodChanged {
            old_period,
            new_period: seconds,
        });
        Ok(())
    }

    pub fn set_min_claim_gap(&mut self, caller: &Address, seconds: u64) -> Result<(), MazeError> {
        self.require_owner(caller)?;
        self.ensure_not_paused()?;
        if seconds == 0 {
            return Err(MazeError::Validation(
                "minimum claim gap cannot be zero".to_string(),
            ));
        }
        let old_gap = self.config.min_claim_gap;
        self.config.min_claim_gap = seconds;
        tracing::info!("Minimum claim gap changed from {}s to {}s", old_gap, seconds);
        self.emit(FarmingEvent::MinClaimGapChanged {
            old_gap,
            new_gap: seconds,
        });
        Ok(())
    }

    pub fn set_vesting(&mut self, caller: &Address, vesting: Address) -> Result<(), MazeError> {
        self.require_owner(caller)?;
        self.ensure_not_paused()?;
        vesting.ensure_non_zero("Vesting")?;
        if vesting == self.config.owner {
            return Err(MazeError::Validation(
                "vesting cannot be the owner address".to_string(),
            ));
        }
        let old_vesting = self.config.vesting;
        self.config.vesting = vesting;
        tracing::info!("Vesting contract changed from {} to {}", old_vesting, vesting);
        self.emit(FarmingEvent::VestingChanged {
            old_vesting,
            new_vesting: vesting,
        });
        Ok(())
    }

    /// Pull `amount` from the owner into the reward reserve.
    pub fn fund_pool(&mut self, caller: &Address, amount: Wei, now: u64) -> Result<(), MazeError> {
        self.require_owner(caller)?;
        self.ensure_not_paused()?;
        if amount == 0 {
            return Err(MazeError::Validation("amount cannot be zero".to_string()));
        }
        self.ensure_in_order(now)?;
        let funded = self.pool.check_fund(amount)?;

        self.token.transfer_in(caller, amount)?;

        self.pool.commit_funding(funded);
        self.last_update = now;

        let remaining = self.pool.remaining();
        tracing::info!(
            "Reward pool funded with {} (remaining {})",
            Maze::from_wei(amount),
            Maze::from_wei(remaining)
        );
        self.emit(FarmingEvent::PoolFunded {
            amount,
            remaining,
            timestamp: now,
        });
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Reward the user would hold after a flush at `now`. Side-effect free.
    pub fn pending_reward(&self, user: &Address, now: u64) -> Result<Wei, MazeError> {
        user.ensure_non_zero("User")?;
        let accrual = self.preview_accrual(user, now)?;
        self.accrued_after(user, &accrual)
    }

    pub fn farming_info(&self, user: &Address, now: u64) -> Result<FarmingInfo, MazeError> {
        let reward = self.pending_reward(user, now)?;
        let info = match self.positions.get(user) {
            Some(p) => FarmingInfo {
                locked_amount: p.current_principal,
                start_time: p.farming_start,
                end_time: if p.farming_start == 0 { p.last_claim_time } else { 0 },
                reward,
            },
            None => FarmingInfo {
                locked_amount: 0,
                start_time: 0,
                end_time: 0,
                reward,
            },
        };
        Ok(info)
    }

    pub fn state_of(&self, user: &Address, now: u64) -> FarmingState {
        match self.positions.get(user) {
            Some(p) => FarmingState::of(p, self.config.min_claim_gap, now),
            None => FarmingState::Empty,
        }
    }

    pub fn position(&self, user: &Address) -> Option<&StakePosition> {
        self.positions.get(user)
    }

    pub fn queue_len(&self, user: &Address, kind: QueueKind) -> usize {
        self.positions
            .get(user)
            .map(|p| kind.of(p).len())
            .unwrap_or(0)
    }

    pub fn queue_entry_at(
        &self,
        user: &Address,
        kind: QueueKind,
        index: usize,
    ) -> Option<&DelayedWithdrawal> {
        self.positions
            .get(user)
            .and_then(|p| kind.of(p).entry_at(index))
    }

    /// Matured, unconsumed entries of one queue, with their indices.
    pub fn claimable_entries(
        &self,
        user: &Address,
        kind: QueueKind,
        now: u64,
    ) -> Vec<(usize, DelayedWithdrawal)> {
        self.positions
            .get(user)
            .map(|p| kind.of(p).claimable_entries(now))
            .unwrap_or_default()
    }

    pub fn config(&self) -> &FarmingConfig {
        &self.config
    }

    pub fn daily_rate(&self) -> u128 {
        self.rates.current()
    }

    pub fn min_lock_period(&self) -> u64 {
        self.config.min_lock_period
    }

    pub fn min_claim_gap(&self) -> u64 {
        self.config.min_claim_gap
    }

    pub fn vesting(&self) -> Address {
        self.config.vesting
    }

    pub fn rate_history(&self) -> &RateHistory {
        &self.rates
    }

    pub fn pool(&self) -> &RewardPool {
        &self.pool
    }

    pub fn total_staked(&self) -> Wei {
        self.pool.total_staked()
    }

    pub fn token(&self) -> &T {
        &self.token
    }

    pub fn token_mut(&mut self) -> &mut T {
        &mut self.token
    }

    pub fn access(&self) -> &A {
        &self.access
    }

    pub fn access_mut(&mut self) -> &mut A {
        &mut self.access
    }

    pub fn events(&self) -> &[FarmingEvent] {
        &self.events
    }

    /// Hand accumulated notifications to the embedder.
    pub fn drain_events(&mut self) -> Vec<FarmingEvent> {
        std::mem::take(&mut self.events)
    }
}
