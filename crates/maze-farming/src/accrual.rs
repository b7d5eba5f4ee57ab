// crates/maze-farming/src/accrual.rs
//
// Reward accrual: splits a position's un-flushed interval at every rate,
// principal, and total-staked checkpoint, and releases a geometrically
// decaying share of the reserve on each piece:
//
//   earned_i = R_i * (1 - (1 - r_i)^d_i) * (u_i / T_i)
//   R_{i+1}  = R_i - earned_i
//
// Lifetime payout is bounded by the funded reserve: as d grows the released
// share tends to R, never past it.
//
// `accrue` is pure. The state machine persists its result on a flush and
// discards it on a read-only query.

use crate::fixed_point::{decay_factor, mul_div_floor, rate_to_one, ONE};
use crate::pool::RewardPool;
use crate::position::StakePosition;
use crate::rate_history::RateHistory;
use maze_core::{MazeError, Wei};

/// One sub-interval with constant inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccrualSegment {
    pub start: u64,
    pub end: u64,
    pub daily_rate: u128,
    pub principal: Wei,
    pub total_staked: Wei,
    pub pool_before: Wei,
    pub earned: Wei,
}

/// Outcome of walking one interval.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accrual {
    /// Sum of `earned` over all segments.
    pub earned: Wei,
    /// Reserve left after the last segment.
    pub pool_after: Wei,
    pub segments: Vec<AccrualSegment>,
}

/// Reward released on one sub-interval.
///
/// Zero when there are no stakers, the rate is zero, or the user holds no
/// principal. Truncates toward zero and never exceeds `pool`.
pub fn segment_reward(
    pool: Wei,
    daily_rate: u128,
    seconds: u64,
    principal: Wei,
    total_staked: Wei,
) -> Result<Wei, MazeError> {
    if total_staked == 0 || daily_rate == 0 || principal == 0 || pool == 0 || seconds == 0 {
        return Ok(0);
    }
    let factor = decay_factor(rate_to_one(daily_rate)?, seconds)?;
    let released = mul_div_floor(pool, factor, ONE)?;
    let share = principal.min(total_staked);
    let earned = mul_div_floor(released, share, total_staked)?;
    Ok(earned.min(pool))
}

/// Walk `[from, to)` for `position`, starting from a reserve of `pool_start`.
pub fn accrue(
    rates: &RateHistory,
    pool: &RewardPool,
    position: &StakePosition,
    from: u64,
    to: u64,
    pool_start: Wei,
) -> Result<Accrual, MazeError> {
    if !position.has_checkpoints() || to <= from {
        return Ok(Accrual {
            earned: 0,
            pool_after: pool_start,
            segments: Vec::new(),
        });
    }

    let mut boundaries: Vec<u64> = Vec::new();
    boundaries.push(from);
    boundaries.extend(rates.boundaries_within(from, to));
    boundaries.extend(position.boundaries_within(from, to));
    boundaries.extend(pool.boundaries_within(from, to));
    boundaries.push(to);
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut remaining = pool_start;
    let mut earned_total: Wei = 0;
    let mut segments = Vec::with_capacity(boundaries.len() - 1);

    for window in boundaries.windows(2) {
        let (start, end) = (window[0], window[1]);
        let daily_rate = rates.rate_at(start);
        let principal = position.principal_at(start);
        let total_staked = pool.total_staked_at(start);

        let earned = segment_reward(remaining, daily_rate, end - start, principal, total_staked)?;
        tracing::debug!(
            start,
            end,
            daily_rate,
            principal,
            total_staked,
            pool = remaining,
            earned,
            "accrual segment"
        );

        segments.push(AccrualSegment {
            start,
            end,
            daily_rate,
            principal,
            total_staked,
            pool_before: remaining,
            earned,
        });
        remaining -= earned;
        earned_total = earned_total
            .checked_add(earned)
            .ok_or_else(|| MazeError::overflow("accrued reward"))?;
    }

    Ok(Accrual {
        earned: earned_total,
        pool_after: remaining,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_point::SECONDS_PER_DAY;
    use maze_core::WEI_PER_MAZE;

    const POOL: Wei = 1_000_000 * WEI_PER_MAZE;

    fn staked(amount: Wei, at: u64) -> (RewardPool, StakePosition) {
        let mut pool = RewardPool::new();
        let funded = pool.check_fund(POOL).unwrap();
        pool.commit_funding(funded);
        pool.set_total_staked(amount, at);
        let mut position = StakePosition::new();
        position.set_principal(amount, at);
        (pool, position)
    }

    #[test]
    fn test_no_checkpoints_earns_nothing() {
        let rates = RateHistory::with_initial(300, 0).unwrap();
        let pool = RewardPool::new();
        let position = StakePosition::new();
        let accrual = accrue(&rates, &pool, &position, 0, SECONDS_PER_DAY, POOL).unwrap();
        assert_eq!(accrual.earned, 0);
        assert_eq!(accrual.pool_after, POOL);
        assert!(accrual.segments.is_empty());
    }

    #[test]
    fn test_single_full_day_sole_staker() {
        let rates = RateHistory::with_initial(300, 0).unwrap();
        let (pool, position) = staked(8 * WEI_PER_MAZE, 0);
        let accrual = accrue(&rates, &pool, &position, 0, SECONDS_PER_DAY, POOL).unwrap();
        // 0.3% of the pool, exactly
        assert_eq!(accrual.earned, POOL * 300 / 100_000);
        assert_eq!(accrual.pool_after, POOL - accrual.earned);
        assert_eq!(accrual.segments.len(), 1);
    }

    #[test]
    fn test_rate_change_splits_interval() {
        let mut rates = RateHistory::with_initial(300, 0).unwrap();
        rates.append_rate(900, SECONDS_PER_DAY / 2).unwrap();
        let (pool, position) = staked(8, 0);

        let accrual = accrue(&rates, &pool, &position, 0, SECONDS_PER_DAY, POOL).unwrap();
        assert_eq!(accrual.segments.len(), 2);
        let first = &accrual.segments[0];
        let second = &accrual.segments[1];
        assert_eq!(first.daily_rate, 300);
        assert_eq!(second.daily_rate, 900);
        assert_eq!(second.pool_before, POOL - first.earned);
        assert_eq!(accrual.earned, first.earned + second.earned);
    }

    // floor(P * (1 - (1 - rate / 100_000)^(seconds / 86_400)) * u / T) for
    // P = 2 * 10^32 - 123_456_789, evaluated with 100-digit decimals.
    const LARGE_POOL: Wei = 200_000_000_000_000_000_000_000_000_000_000 - 123_456_789;
    const SEGMENT_REFERENCE: [(u128, u64, Wei, Wei, Wei); 12] = [
        (300, 1, 8, 8, 6954881870506269034401120),
        (300, 43200, 3, 8, 112584501800304151257837737958),
        (300, 617145, 8, 8, 4246441537221517960464591469510),
        (7500, 3600, 3, 8, 243234541960432364110130404375),
        (7500, 43200, 8, 8, 7646159383286552481446366068014),
        (7500, 617145, 3, 8, 32025022547157201776712039386833),
        (50000, 1, 8, 8, 1604500926314802035365329825),
        (50000, 43200, 3, 8, 21966991411008935669936659282265),
        (50000, 617145, 8, 8, 198584831103177984889371501209432),
        (99999, 1, 3, 8, 9993193092032363084393059010),
        (99999, 3600, 8, 8, 76206836221747887681116945181734),
        (99999, 617145, 3, 8, 74999999999999999999999953703704),
    ];

    #[test]
    fn test_segment_reward_within_one_wei_of_exact() {
        for (rate, seconds, principal, total, exact) in SEGMENT_REFERENCE {
            let got = segment_reward(LARGE_POOL, rate, seconds, principal, total).unwrap();
            let err = if got > exact { got - exact } else { exact - got };
            assert!(
                err <= 1,
                "rate {} seconds {} share {}/{}: got {} want {}",
                rate,
                seconds,
                principal,
                total,
                got,
                exact
            );
        }
    }

    #[test]
    fn test_pro_rata_share_against_total() {
        let rates = RateHistory::with_initial(300, 0).unwrap();
        let mut pool = RewardPool::new();
        let funded = pool.check_fund(POOL).unwrap();
        pool.commit_funding(funded);
        pool.set_total_staked(8, 0);
        let mut position = StakePosition::new();
        position.set_principal(2, 0);

        let accrual = accrue(&rates, &pool, &position, 0, SECONDS_PER_DAY, POOL).unwrap();
        assert_eq!(accrual.earned, POOL * 300 / 100_000 / 4);
    }

    #[test]
    fn test_other_stakers_split_segments() {
        let rates = RateHistory::with_initial(300, 0).unwrap();
        let (mut pool, position) = staked(8, 0);
        // Someone else stakes 8 more half way through the day
        pool.set_total_staked(16, SECONDS_PER_DAY / 2);

        let accrual = accrue(&rates, &pool, &position, 0, SECONDS_PER_DAY, POOL).unwrap();
        assert_eq!(accrual.segments.len(), 2);
        assert_eq!(accrual.segments[1].total_staked, 16);
        let full_share =
            segment_reward(accrual.segments[1].pool_before, 300, SECONDS_PER_DAY / 2, 8, 8)
                .unwrap();
        assert_eq!(accrual.segments[1].earned, full_share / 2);
    }

    #[test]
    fn test_zero_short_circuits() {
        assert_eq!(segment_reward(POOL, 0, SECONDS_PER_DAY, 8, 8).unwrap(), 0);
        assert_eq!(segment_reward(POOL, 300, SECONDS_PER_DAY, 8, 0).unwrap(), 0);
        assert_eq!(segment_reward(POOL, 300, SECONDS_PER_DAY, 0, 8).unwrap(), 0);
        assert_eq!(segment_reward(0, 300, SECONDS_PER_DAY, 8, 8).unwrap(), 0);
    }

    #[test]
    fn test_never_exceeds_pool() {
        // 99.999% per day over a year drains the pool, but not past it
        let earned = segment_reward(POOL, 99_999, 365 * SECONDS_PER_DAY, 8, 8).unwrap();
        assert!(earned <= POOL);
        assert!(earned > POOL - POOL / 1_000_000);
    }

    #[test]
    fn test_empty_interval() {
        let rates = RateHistory::with_initial(300, 0).unwrap();
        let (pool, position) = staked(8, 0);
        let accrual = accrue(&rates, &pool, &position, 500, 500, POOL).unwrap();
        assert_eq!(accrual.earned, 0);
    }
}
