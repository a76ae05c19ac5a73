//! sv-viscosity: dynamic viscosity of water and steam for steamvisc.
//!
//! Provides:
//! - The IAPWS industrial viscosity correlation μ(T, ρ)
//! - Analytic partial derivatives ∂μ/∂T and ∂μ/∂ρ
//! - A `ViscosityModel` trait for material-property frameworks
//! - Checked, uom-typed evaluation that rejects non-physical states
//! - Batch evaluation (parallel with the `rayon` feature)
//!
//! # Architecture
//!
//! The raw entry points in [`iapws`] take SI `f64` values, never fail and keep
//! no state, so they can be called from any thread in a hot assembly loop.
//! Non-positive or non-finite inputs propagate to non-finite outputs.
//! [`WaterViscosityIapws`] wraps them behind [`ViscosityModel`] and adds
//! domain-checked variants returning [`ViscosityResult`].
//!
//! # Example
//!
//! ```
//! use sv_viscosity::{WaterViscosityIapws, viscosity, d_viscosity_dt};
//! use sv_core::units::{k, kg_per_m3};
//!
//! let mu = viscosity(298.15, 998.0);
//! assert!((mu - 889.7e-6).abs() < 1e-6);
//! assert!(d_viscosity_dt(298.15, 998.0) < 0.0);
//!
//! let model = WaterViscosityIapws::new();
//! let mu = model.viscosity_at(k(298.15), kg_per_m3(998.0)).unwrap();
//! println!("Viscosity: {} Pa·s", mu.value);
//! ```

pub mod batch;
pub mod coefficients;
pub mod dilute;
pub mod error;
pub mod iapws;
pub mod model;
pub mod reduced;
pub mod residual;

// Re-exports for ergonomics
#[cfg(feature = "rayon")]
pub use batch::viscosity_packs;
pub use batch::viscosity_packs_serial;
pub use error::{ViscosityError, ViscosityResult};
pub use iapws::{ViscosityPack, d_viscosity_drho, d_viscosity_dt, viscosity, viscosity_pack};
pub use model::{PropertyVariable, PropertyVariables, ViscosityModel, WaterViscosityIapws};
pub use reduced::ReducedState;
pub use residual::SeriesFactors;
