//! Reference constants and coefficient tables of the IAPWS viscosity correlation.
//!
//! Values are fixed by the IAPWS release and must not be edited.

use sv_core::Real;

/// Reference temperature [K].
pub const REF_T: Real = 647.096;

/// Reference density [kg/m³].
pub const REF_RHO: Real = 322.0;

/// Reference viscosity [Pa·s].
pub const REF_MU: Real = 1.0e-6;

/// Number of terms in the dilute-gas polynomial.
pub const N_DILUTE: usize = 4;

/// Number of powers of `(1/T̄ - 1)` in the residual series.
pub const N_SERIES_T: usize = 6;

/// Number of powers of `(ρ̄ - 1)` in the residual series.
pub const N_SERIES_RHO: usize = 7;

/// Dilute-gas coefficients `H_i`.
pub const H: [Real; N_DILUTE] = [1.67752, 2.20462, 0.6366564, -0.241605];

/// Residual coefficients `H_ij`, row `i` over `(1/T̄ - 1)^i`, column `j` over `(ρ̄ - 1)^j`.
#[rustfmt::skip]
pub const H_IJ: [[Real; N_SERIES_RHO]; N_SERIES_T] = [
    [ 0.520094,  0.222531, -0.281378, 0.161913, -0.0325372, 0.0,         0.0         ],
    [ 0.0850895, 0.999115, -0.906851, 0.257399,  0.0,       0.0,         0.0         ],
    [-1.08374,   1.88797,  -0.772479, 0.0,       0.0,       0.0,         0.0         ],
    [-0.289555,  1.26613,  -0.489837, 0.0,       0.0698452, 0.0,        -0.00435673  ],
    [ 0.0,       0.0,      -0.25704,  0.0,       0.0,       0.00872102,  0.0         ],
    [ 0.0,       0.120573,  0.0,      0.0,       0.0,       0.0,        -0.000593264 ],
];
