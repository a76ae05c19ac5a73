//! Residual contribution μ̄₁(T̄, ρ̄) = exp(ρ̄·f1).
//!
//! `f1` is a double power series in `(1/T̄ - 1)` and `(ρ̄ - 1)`. The powers
//! of both bases are built once per evaluation into [`SeriesFactors`] and
//! shared by `f1` and its two partial derivatives.

use crate::coefficients::{H_IJ, N_SERIES_RHO, N_SERIES_T};
use crate::reduced::ReducedState;
use sv_core::Real;

/// Powers of the two shifted reduced variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesFactors {
    /// `(1/T̄ - 1)^k`, k = 0..6
    pub t: [Real; N_SERIES_T],
    /// `(ρ̄ - 1)^k`, k = 0..7
    pub rho: [Real; N_SERIES_RHO],
}

impl SeriesFactors {
    pub fn new(state: ReducedState) -> Self {
        Self {
            t: series_t(state.t_bar),
            rho: series_rho(state.rho_bar),
        }
    }
}

fn powers<const N: usize>(base: Real) -> [Real; N] {
    let mut out = [1.0; N];
    for k in 1..N {
        out[k] = out[k - 1] * base;
    }
    out
}

/// `S_T[k] = (1/T̄ - 1)^k`.
#[inline]
pub fn series_t(t_bar: Real) -> [Real; N_SERIES_T] {
    powers(1.0 / t_bar - 1.0)
}

/// `S_ρ[k] = (ρ̄ - 1)^k`.
#[inline]
pub fn series_rho(rho_bar: Real) -> [Real; N_SERIES_RHO] {
    powers(rho_bar - 1.0)
}

/// Inner sum `Σ_j H_ij · S_ρ[j]` for row `i`.
#[inline]
fn row_sum(i: usize, s_rho: &[Real; N_SERIES_RHO]) -> Real {
    let mut sum = 0.0;
    for (h, s) in H_IJ[i].iter().zip(s_rho) {
        sum += h * s;
    }
    sum
}

/// `f1 = Σ_i S_T[i] · Σ_j H_ij · S_ρ[j]`.
pub fn f1(s: &SeriesFactors) -> Real {
    let mut sum = 0.0;
    for (i, s_t) in s.t.iter().enumerate() {
        sum += s_t * row_sum(i, &s.rho);
    }
    sum
}

/// `∂f1/∂T̄`, through `d(1/T̄ - 1)/dT̄ = -1/T̄²`.
pub fn df1_dt_bar(s: &SeriesFactors, t_bar: Real) -> Real {
    let mut sum = 0.0;
    for i in 1..N_SERIES_T {
        sum -= i as Real * s.t[i - 1] * row_sum(i, &s.rho) / (t_bar * t_bar);
    }
    sum
}

/// `∂f1/∂ρ̄`, through `d(ρ̄ - 1)/dρ̄ = 1`.
pub fn df1_drho_bar(s: &SeriesFactors) -> Real {
    let mut sum = 0.0;
    for (i, s_t) in s.t.iter().enumerate() {
        let mut row = 0.0;
        for j in 1..N_SERIES_RHO {
            row += j as Real * H_IJ[i][j] * s.rho[j - 1];
        }
        sum += s_t * row;
    }
    sum
}

/// Reduced residual multiplier `μ̄₁ = exp(ρ̄·f1)`.
#[inline]
pub fn mu1(rho_bar: Real, f1: Real) -> Real {
    (rho_bar * f1).exp()
}
