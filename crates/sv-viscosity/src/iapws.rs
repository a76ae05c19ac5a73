//! Raw IAPWS viscosity entry points.
//!
//! μ = μ_ref · μ̄₀(T̄) · μ̄₁(T̄, ρ̄), with `μ̄₀` from [`crate::dilute`] and
//! `μ̄₁ = exp(ρ̄·f1)` from [`crate::residual`]. Inputs are SI (K, kg/m³) and
//! are not validated; see [`crate::WaterViscosityIapws`] for the checked
//! variants.

use crate::coefficients::{REF_MU, REF_RHO, REF_T};
use crate::reduced::ReducedState;
use crate::residual::SeriesFactors;
use crate::{dilute, residual};
use sv_core::Real;
use sv_core::units::{DViscDrho, DViscDt};

/// Viscosity and both sensitivities from one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViscosityPack {
    /// Dynamic viscosity [Pa·s]
    pub mu: Real,
    /// ∂μ/∂T at constant ρ [Pa·s/K]
    pub dmu_dt: DViscDt,
    /// ∂μ/∂ρ at constant T [Pa·s·m³/kg]
    pub dmu_drho: DViscDrho,
}

/// Per-call intermediates shared by the value and its derivatives.
struct Terms {
    state: ReducedState,
    series: SeriesFactors,
    f1: Real,
    mu0: Real,
    mu1: Real,
}

impl Terms {
    #[inline]
    fn evaluate(t_k: Real, rho_kg_m3: Real) -> Self {
        let state = ReducedState::from_physical(t_k, rho_kg_m3);
        let series = SeriesFactors::new(state);
        let f1 = residual::f1(&series);
        Self {
            state,
            series,
            f1,
            mu0: dilute::mu0(state.t_bar),
            mu1: residual::mu1(state.rho_bar, f1),
        }
    }

    #[inline]
    fn mu_bar(&self) -> Real {
        self.mu0 * self.mu1
    }

    /// dμ̄/dT̄ = dμ̄₀/dT̄ · μ̄₁ + dμ̄₁/dT̄ · μ̄₀
    fn dmu_dt_bar(&self) -> Real {
        let t_bar = self.state.t_bar;
        let dmu1 = self.state.rho_bar * self.mu1 * residual::df1_dt_bar(&self.series, t_bar);
        dilute::dmu0_dt_bar(t_bar) * self.mu1 + dmu1 * self.mu0
    }

    /// dμ̄/dρ̄ = μ̄₀ · μ̄₁ · (f1 + ρ̄ · ∂f1/∂ρ̄)
    fn dmu_drho_bar(&self) -> Real {
        let exponent_slope = self.f1 + self.state.rho_bar * residual::df1_drho_bar(&self.series);
        self.mu0 * self.mu1 * exponent_slope
    }
}

/// Dynamic viscosity μ(T, ρ) [Pa·s].
pub fn viscosity(t_k: Real, rho_kg_m3: Real) -> Real {
    Terms::evaluate(t_k, rho_kg_m3).mu_bar() * REF_MU
}

/// ∂μ/∂T at constant density [Pa·s/K].
pub fn d_viscosity_dt(t_k: Real, rho_kg_m3: Real) -> DViscDt {
    REF_MU * Terms::evaluate(t_k, rho_kg_m3).dmu_dt_bar() / REF_T
}

/// ∂μ/∂ρ at constant temperature [Pa·s·m³/kg].
pub fn d_viscosity_drho(t_k: Real, rho_kg_m3: Real) -> DViscDrho {
    REF_MU * Terms::evaluate(t_k, rho_kg_m3).dmu_drho_bar() / REF_RHO
}

/// All three quantities from a single set of intermediates.
///
/// Each field is bit-identical to the matching single entry point.
pub fn viscosity_pack(t_k: Real, rho_kg_m3: Real) -> ViscosityPack {
    let terms = Terms::evaluate(t_k, rho_kg_m3);
    ViscosityPack {
        mu: terms.mu_bar() * REF_MU,
        dmu_dt: REF_MU * terms.dmu_dt_bar() / REF_T,
        dmu_drho: REF_MU * terms.dmu_drho_bar() / REF_RHO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_core::{Tolerances, nearly_equal};

    #[test]
    fn critical_point_closed_form() {
        let expected = 100.0 / 4.2771814 * 0.520094_f64.exp() * 1.0e-6;
        let mu = viscosity(REF_T, REF_RHO);
        let tol = Tolerances {
            abs: 0.0,
            rel: 1e-12,
        };
        assert!(nearly_equal(mu, expected, tol), "mu = {mu}");
        assert!((mu - 3.933e-5).abs() < 5e-9);
    }

    #[test]
    fn liquid_water_at_ambient() {
        // 25 °C, saturated-liquid-like density; published ≈ 889.7 µPa·s
        let mu = viscosity(298.15, 998.0);
        assert!((mu - 889.7e-6).abs() / 889.7e-6 < 0.01, "mu = {mu}");
    }

    #[test]
    fn pack_is_bit_identical_to_entry_points() {
        for (t, rho) in [(300.0, 996.5), (647.096, 322.0), (900.0, 2.5)] {
            let pack = viscosity_pack(t, rho);
            assert_eq!(pack.mu.to_bits(), viscosity(t, rho).to_bits());
            assert_eq!(pack.dmu_dt.to_bits(), d_viscosity_dt(t, rho).to_bits());
            assert_eq!(pack.dmu_drho.to_bits(), d_viscosity_drho(t, rho).to_bits());
        }
    }

    #[test]
    fn zero_temperature_is_not_finite() {
        assert!(!viscosity(0.0, 500.0).is_finite());
        assert!(!d_viscosity_dt(0.0, 500.0).is_finite());
        assert!(!d_viscosity_drho(0.0, 500.0).is_finite());
    }

    #[test]
    fn liquid_viscosity_falls_with_temperature() {
        assert!(d_viscosity_dt(300.0, 996.5) < 0.0);
    }
}
