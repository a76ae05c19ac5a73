//! Viscosity evaluation errors.

use sv_core::SvError;
use thiserror::Error;

/// Result type for checked viscosity evaluation.
pub type ViscosityResult<T> = Result<T, ViscosityError>;

/// Errors reported by the checked front door. The raw evaluator never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViscosityError {
    /// Input outside the physical domain (non-positive or non-finite).
    #[error("Out of domain: {what} = {value}")]
    OutOfDomain { what: &'static str, value: f64 },

    /// The correlation produced a non-finite result.
    #[error("Non-finite result for {what}")]
    NonFinite { what: &'static str },
}

impl From<SvError> for ViscosityError {
    fn from(err: SvError) -> Self {
        match err {
            SvError::OutOfDomain { what, value } => ViscosityError::OutOfDomain { what, value },
            SvError::NonFinite { what, .. } => ViscosityError::NonFinite { what },
        }
    }
}

impl From<ViscosityError> for SvError {
    fn from(err: ViscosityError) -> Self {
        match err {
            ViscosityError::OutOfDomain { what, value } => SvError::OutOfDomain { what, value },
            ViscosityError::NonFinite { what } => SvError::NonFinite {
                what,
                value: f64::NAN,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ViscosityError::OutOfDomain {
            what: "temperature",
            value: 0.0,
        };
        assert!(err.to_string().contains("temperature"));

        let err = ViscosityError::NonFinite { what: "viscosity" };
        assert!(err.to_string().contains("viscosity"));
    }

    #[test]
    fn error_to_sv_error() {
        let err = ViscosityError::OutOfDomain {
            what: "density",
            value: -1.0,
        };
        let sv: SvError = err.into();
        assert_eq!(
            sv,
            SvError::OutOfDomain {
                what: "density",
                value: -1.0
            }
        );
    }

    #[test]
    fn finite_check_converts_from_core() {
        let err: ViscosityError = sv_core::ensure_finite(f64::INFINITY, "dmu/dT")
            .unwrap_err()
            .into();
        assert_eq!(err, ViscosityError::NonFinite { what: "dmu/dT" });
    }

    #[test]
    fn domain_check_converts_from_core() {
        let err: ViscosityError = sv_core::ensure_positive(-5.0, "temperature")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            ViscosityError::OutOfDomain {
                what: "temperature",
                ..
            }
        ));
    }
}
