// crates/maze-farming/src/fixed_point.rs
//
// Fixed-point arithmetic for the compounding-decay reward curve.
//
// All fractions are u128 integers scaled by ONE = 10^36. Products go through
// a 256-bit intermediate so that `pool * factor` never overflows for any
// u128 pool. Every division truncates toward zero.
//
// The decay factor (1 - r)^d for a fractional number of days d = n + f is
// computed as (1 - r)^n * (1 - r)^f:
//   - (1 - r)^n by square-and-multiply.
//   - (1 - r)^f by first writing 1 - r = s * 2^-m with s in [1/2, 1], then
//     (1 - r)^f = s^f * (1/2)^(m*f). Both factors are evaluated with the
//     binomial series (1 - x)^t = 1 - sum_k |C(t, k)| x^k, which for
//     0 < t < 1 has only negative terms after the first and converges at
//     least as fast as 2^-k because x <= 1/2.
//
// Error bound: each truncating step loses at most one unit in the last
// place (ulp) of ONE. Each series stops after at most ~120 terms and
// accumulates at most 4 ulp per term. Square-and-multiply at most doubles
// the carried error per squaring, so whole days below 1024 contribute at
// most ~1050 ulp. For sub-intervals shorter than 1024 days the factor is
// within FACTOR_ERROR_ULPS ulp (4 * 10^-33) of the exact value, and for a
// pool below 2.5 * 10^32 wei the reward of one sub-interval is off by less
// than one wei before the final truncating division. Longer sub-intervals
// double the bound per doubling of the day count.

use maze_core::MazeError;

/// Fixed-point scale: 1.0 == 10^36.
pub const ONE: u128 = 1_000_000_000_000_000_000_000_000_000_000_000_000;

/// Scale of the admin-facing daily rate: 100_000 == 100% per day.
pub const RATE_PRECISION: u128 = 100_000;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Upper bound on binomial series terms; the series reaches zero long before.
pub const SERIES_MAX_TERMS: u128 = 160;

/// Documented worst-case error of `decay_factor`, in ulp of `ONE`.
pub const FACTOR_ERROR_ULPS: u128 = 4_000;

/// Full 128x128 -> 256-bit product, returned as (high, low) halves.
fn full_mul(a: u128, b: u128) -> (u128, u128) {
    let mask = u64::MAX as u128;
    let (a_hi, a_lo) = (a >> 64, a & mask);
    let (b_hi, b_lo) = (b >> 64, b & mask);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    let mid = (ll >> 64) + (lh & mask) + (hl & mask);
    let lo = (ll & mask) | (mid << 64);
    let hi = hh + (lh >> 64) + (hl >> 64) + (mid >> 64);
    (hi, lo)
}

/// floor(a * b / denom) with a 256-bit intermediate.
///
/// # Errors
/// `MazeError::Arithmetic` if `denom == 0` or the quotient does not fit in u128.
pub fn mul_div_floor(a: u128, b: u128, denom: u128) -> Result<u128, MazeError> {
    if denom == 0 {
        return Err(MazeError::Arithmetic("division by zero".to_string()));
    }
    let (hi, lo) = full_mul(a, b);
    if hi == 0 {
        return Ok(lo / denom);
    }
    if hi >= denom {
        return Err(MazeError::overflow("mul_div_floor"));
    }

    // Restoring long division of (hi, lo) by denom; hi < denom keeps the
    // quotient within 128 bits.
    let mut rem = hi;
    let mut quot: u128 = 0;
    for i in (0..128).rev() {
        let carry = rem >> 127;
        rem = (rem << 1) | ((lo >> i) & 1);
        quot <<= 1;
        if carry == 1 || rem >= denom {
            rem = rem.wrapping_sub(denom);
            quot |= 1;
        }
    }
    Ok(quot)
}

/// floor(a * b / ONE).
pub fn mul_one(a: u128, b: u128) -> Result<u128, MazeError> {
    mul_div_floor(a, b, ONE)
}

/// Convert an admin daily rate (scale `RATE_PRECISION`) to scale `ONE`.
pub fn rate_to_one(rate: u128) -> Result<u128, MazeError> {
    if rate >= RATE_PRECISION {
        return Err(MazeError::Validation(format!(
            "rate {} out of range [0, {})",
            rate, RATE_PRECISION
        )));
    }
    // ONE is a multiple of RATE_PRECISION, so this is exact.
    Ok(rate * (ONE / RATE_PRECISION))
}

/// base^n for base in [0, ONE], by square-and-multiply.
pub fn pow_int(base: u128, mut n: u64) -> Result<u128, MazeError> {
    let mut result = ONE;
    let mut b = base;
    while n > 0 {
        if n & 1 == 1 {
            result = mul_one(result, b)?;
            if result == 0 {
                break;
            }
        }
        n >>= 1;
        if n > 0 {
            b = mul_one(b, b)?;
        }
    }
    Ok(result)
}

/// (1 - x)^(num/den) for x in [0, ONE/2] and 0 <= num < den.
fn binomial_series(x: u128, num: u128, den: u128) -> Result<u128, MazeError> {
    if num == 0 || x == 0 {
        return Ok(ONE);
    }
    let mut term = mul_div_floor(x, num, den)?;
    let mut sum = term;
    let mut k: u128 = 1;
    while term > 0 && k < SERIES_MAX_TERMS {
        // |a_{k+1}| x^{k+1} = |a_k| x^k * x * (k - t) / (k + 1)
        term = mul_one(term, x)?;
        term = mul_div_floor(term, k * den - num, (k + 1) * den)?;
        sum += term;
        k += 1;
    }
    Ok(ONE - sum.min(ONE))
}

/// base^(num/den) for base in [0, ONE] and 0 <= num < den.
pub fn pow_frac(base: u128, num: u128, den: u128) -> Result<u128, MazeError> {
    if den == 0 || num >= den {
        return Err(MazeError::Arithmetic(format!(
            "fractional exponent {}/{} outside [0, 1)",
            num, den
        )));
    }
    if num == 0 || base >= ONE {
        return Ok(ONE);
    }
    if base == 0 {
        return Ok(0);
    }

    // base = s * 2^-m with s in [ONE/2, ONE]; doubling is exact.
    let mut s = base;
    let mut m: u128 = 0;
    while s < ONE / 2 {
        s <<= 1;
        m += 1;
    }

    let mantissa = binomial_series(ONE - s, num, den)?;

    let halvings = m * num;
    let whole = halvings / den;
    let half_pow = if whole >= 128 {
        0
    } else {
        binomial_series(ONE / 2, halvings % den, den)? >> whole
    };

    mul_one(mantissa, half_pow)
}

/// (1 - rate)^(seconds / SECONDS_PER_DAY), `rate_one` on scale `ONE`.
pub fn retention_factor(rate_one: u128, seconds: u64) -> Result<u128, MazeError> {
    if rate_one >= ONE {
        return Err(MazeError::Validation("rate must be below 1".to_string()));
    }
    let base = ONE - rate_one;
    let whole_days = seconds / SECONDS_PER_DAY;
    let rest = (seconds % SECONDS_PER_DAY) as u128;

    let whole = pow_int(base, whole_days)?;
    if rest == 0 || whole == 0 {
        return Ok(whole);
    }
    let partial = pow_frac(base, rest, SECONDS_PER_DAY as u128)?;
    mul_one(whole, partial)
}

/// Share of the pool released over `seconds`: 1 - (1 - rate)^(days).
///
/// Zero when the rate or the duration is zero.
pub fn decay_factor(rate_one: u128, seconds: u64) -> Result<u128, MazeError> {
    if rate_one == 0 || seconds == 0 {
        return Ok(0);
    }
    let retained = retention_factor(rate_one, seconds)?;
    Ok(ONE - retained.min(ONE))
}
