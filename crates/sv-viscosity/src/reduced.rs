//! Reduced (dimensionless) state of the correlation.

use crate::coefficients::{REF_RHO, REF_T};
use sv_core::Real;

/// Temperature and density divided by their reference values.
///
/// Computed per call and never validated: non-finite or non-positive
/// physical inputs simply produce the corresponding reduced values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedState {
    /// T̄ = T / T_ref
    pub t_bar: Real,
    /// ρ̄ = ρ / ρ_ref
    pub rho_bar: Real,
}

impl ReducedState {
    /// Reduce temperature [K] and density [kg/m³].
    #[inline]
    pub fn from_physical(t_k: Real, rho_kg_m3: Real) -> Self {
        Self {
            t_bar: t_k / REF_T,
            rho_bar: rho_kg_m3 / REF_RHO,
        }
    }
}
