//! Batch evaluation over many (T, ρ) points.
//!
//! The parallel variant needs the `rayon` feature. Output order always
//! follows input order.

use crate::iapws::{ViscosityPack, viscosity_pack};
use sv_core::Real;

/// Evaluate one pack per `(T [K], ρ [kg/m³])` point on the calling thread.
pub fn viscosity_packs_serial(points: &[(Real, Real)]) -> Vec<ViscosityPack> {
    points
        .iter()
        .map(|&(t_k, rho_kg_m3)| viscosity_pack(t_k, rho_kg_m3))
        .collect()
}

/// Evaluate one pack per `(T [K], ρ [kg/m³])` point on the rayon pool.
#[cfg(feature = "rayon")]
pub fn viscosity_packs(points: &[(Real, Real)]) -> Vec<ViscosityPack> {
    use rayon::prelude::*;

    tracing::trace!(n = points.len(), "parallel viscosity batch");
    points
        .par_iter()
        .map(|&(t_k, rho_kg_m3)| viscosity_pack(t_k, rho_kg_m3))
        .collect()
}
