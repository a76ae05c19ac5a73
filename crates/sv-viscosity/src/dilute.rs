//! Dilute-gas contribution μ̄₀(T̄).

use crate::coefficients::H;
use sv_core::Real;

/// Denominator `f0(T̄) = Σ H_i / T̄^i`.
pub fn f0(t_bar: Real) -> Real {
    let mut sum = 0.0;
    let mut t_pow = 1.0;
    for h in H {
        sum += h / t_pow;
        t_pow *= t_bar;
    }
    sum
}

/// `df0/dT̄ = -Σ_{i≥1} i·H_i / T̄^(i+1)`.
pub fn df0_dt_bar(t_bar: Real) -> Real {
    let mut sum = 0.0;
    let mut t_pow = t_bar * t_bar;
    for (i, h) in H.iter().enumerate().skip(1) {
        sum -= i as Real * (h / t_pow);
        t_pow *= t_bar;
    }
    sum
}

/// Reduced dilute-gas viscosity `μ̄₀ = 100·√T̄ / f0`.
#[inline]
pub fn mu0(t_bar: Real) -> Real {
    100.0 * t_bar.sqrt() / f0(t_bar)
}

/// `dμ̄₀/dT̄` by the quotient rule on `100·T̄^½ / f0`.
pub fn dmu0_dt_bar(t_bar: Real) -> Real {
    let f = f0(t_bar);
    let sqrt_t = t_bar.sqrt();
    50.0 / (f * sqrt_t) - 100.0 * sqrt_t * df0_dt_bar(t_bar) / (f * f)
}
