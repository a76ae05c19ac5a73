//! Viscosity model trait and the IAPWS water model.

use crate::error::{ViscosityError, ViscosityResult};
use crate::iapws::{self, ViscosityPack};
use sv_core::Real;
use sv_core::units::{DViscDrho, DViscDt, Density, DynVisc, Pressure, Temperature, pa_s};

/// Primary variable a property may be differentiated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyVariable {
    Temperature,
    Pressure,
    Density,
}

/// State variables handed to a material property, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyVariables {
    /// Temperature [K]
    pub t: Real,
    /// Pressure [Pa]
    pub p: Real,
    /// Density [kg/m³]
    pub rho: Real,
}

impl PropertyVariables {
    pub fn new(t: Real, p: Real, rho: Real) -> Self {
        Self { t, p, rho }
    }

    /// Build from typed quantities.
    pub fn from_quantities(t: Temperature, p: Pressure, rho: Density) -> Self {
        Self::new(t.value, p.value, rho.value)
    }

    pub fn get(&self, var: PropertyVariable) -> Real {
        match var {
            PropertyVariable::Temperature => self.t,
            PropertyVariable::Pressure => self.p,
            PropertyVariable::Density => self.rho,
        }
    }
}

/// Trait for viscosity models plugged into a material-property framework.
///
/// Implementations must be thread-safe (Send + Sync) so one instance can be
/// shared by a parallel assembly loop.
pub trait ViscosityModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Viscosity [Pa·s] at the given state.
    fn value(&self, vars: &PropertyVariables) -> Real;

    /// Partial derivative of viscosity with respect to `var`.
    fn d_value(&self, vars: &PropertyVariables, var: PropertyVariable) -> Real;

    /// Value and temperature/density derivatives together.
    ///
    /// The default calls [`Self::value`] and [`Self::d_value`] separately;
    /// models that share intermediates should override it.
    fn pack(&self, vars: &PropertyVariables) -> ViscosityPack {
        ViscosityPack {
            mu: self.value(vars),
            dmu_dt: self.d_value(vars, PropertyVariable::Temperature),
            dmu_drho: self.d_value(vars, PropertyVariable::Density),
        }
    }
}

/// Water/steam viscosity after the IAPWS industrial formulation.
///
/// Depends on temperature and density only. The [`ViscosityModel`] methods are
/// unchecked; the `*_at` methods validate their inputs first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaterViscosityIapws;

impl WaterViscosityIapws {
    pub const NAME: &'static str = "Water viscosity model based on IAPWS formulation";

    pub fn new() -> Self {
        Self
    }

    /// Checked viscosity.
    pub fn viscosity_at(&self, t: Temperature, rho: Density) -> ViscosityResult<DynVisc> {
        let (t_k, rho_kg_m3) = validation::validate_state(t, rho)?;
        let mu = validation::validate_output(iapws::viscosity(t_k, rho_kg_m3), "viscosity")?;
        Ok(pa_s(mu))
    }

    /// Checked ∂μ/∂T [Pa·s/K].
    pub fn d_viscosity_dt_at(&self, t: Temperature, rho: Density) -> ViscosityResult<DViscDt> {
        let (t_k, rho_kg_m3) = validation::validate_state(t, rho)?;
        validation::validate_output(iapws::d_viscosity_dt(t_k, rho_kg_m3), "dmu/dT")
    }

    /// Checked ∂μ/∂ρ [Pa·s·m³/kg].
    pub fn d_viscosity_drho_at(&self, t: Temperature, rho: Density) -> ViscosityResult<DViscDrho> {
        let (t_k, rho_kg_m3) = validation::validate_state(t, rho)?;
        validation::validate_output(iapws::d_viscosity_drho(t_k, rho_kg_m3), "dmu/drho")
    }

    /// Checked property pack.
    pub fn pack_at(&self, t: Temperature, rho: Density) -> ViscosityResult<ViscosityPack> {
        let (t_k, rho_kg_m3) = validation::validate_state(t, rho)?;
        let pack = iapws::viscosity_pack(t_k, rho_kg_m3);
        validation::validate_output(pack.mu, "viscosity")?;
        validation::validate_output(pack.dmu_dt, "dmu/dT")?;
        validation::validate_output(pack.dmu_drho, "dmu/drho")?;
        Ok(pack)
    }
}

impl ViscosityModel for WaterViscosityIapws {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn value(&self, vars: &PropertyVariables) -> Real {
        iapws::viscosity(vars.t, vars.rho)
    }

    fn d_value(&self, vars: &PropertyVariables, var: PropertyVariable) -> Real {
        match var {
            PropertyVariable::Temperature => iapws::d_viscosity_dt(vars.t, vars.rho),
            PropertyVariable::Density => iapws::d_viscosity_drho(vars.t, vars.rho),
            // pressure acts only through density
            PropertyVariable::Pressure => 0.0,
        }
    }

    fn pack(&self, vars: &PropertyVariables) -> ViscosityPack {
        iapws::viscosity_pack(vars.t, vars.rho)
    }
}

/// Domain checks for the typed front door.
pub(crate) mod validation {
    use super::*;
    use sv_core::{ensure_finite, ensure_positive};

    /// Ensure temperature and density are positive and finite.
    pub fn validate_state(t: Temperature, rho: Density) -> ViscosityResult<(Real, Real)> {
        ensure_positive(t.value, "temperature")
            .and_then(|t_k| ensure_positive(rho.value, "density").map(|rho_kg_m3| (t_k, rho_kg_m3)))
            .map_err(|err| {
                tracing::debug!(t = t.value, rho = rho.value, error = %err, "rejected viscosity state");
                ViscosityError::from(err)
            })
    }

    /// Ensure an evaluated quantity is finite.
    pub fn validate_output(v: Real, what: &'static str) -> ViscosityResult<Real> {
        ensure_finite(v, what).map_err(|err| {
            tracing::debug!(what, value = v, "non-finite viscosity result");
            ViscosityError::from(err)
        })
    }
}
