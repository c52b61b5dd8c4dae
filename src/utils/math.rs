/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Mathematical utility functions for transport calculations
//!
//! This module provides the numerical building blocks shared by the solver and
//! integrator modules: trapezoidal quadrature on (possibly non-uniform) grids,
//! complete Fermi-Dirac integrals of half-integer order, the Bessel function
//! J1 needed for cylindrical pore form factors, and a bracketed bisection
//! root finder with a bounded iteration count.

use super::errors::{Result, UtilsError};
use ndarray::Array1;
use std::f64::consts::PI;

/// Gamma(3/2), normalization of the order-1/2 Fermi-Dirac integral
const GAMMA_THREE_HALVES: f64 = 0.886_226_925_452_758;

/// Gamma(1/2) = sqrt(pi), normalization of the order-(-1/2) Fermi-Dirac integral
const GAMMA_ONE_HALF: f64 = 1.772_453_850_905_516;

/// Number of quadrature samples for the Fermi-Dirac integrals
const FD_SAMPLES: usize = 2000;

/// Trapezoidal quadrature of y(x) over a monotonically increasing grid
///
/// # Arguments
///
/// * `x` - Sample positions, strictly increasing
/// * `y` - Sample values, same length as `x`
///
/// # Returns
///
/// The integral, or an error if the arrays are too short or mismatched
pub fn trapezoid(x: &Array1<f64>, y: &Array1<f64>) -> Result<f64> {
    if x.len() != y.len() {
        return Err(UtilsError::Math(format!(
            "trapezoid length mismatch: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(UtilsError::Math(
            "trapezoid needs at least two samples".to_string(),
        ));
    }

    let mut sum = 0.0;
    for i in 0..x.len() - 1 {
        sum += 0.5 * (y[i] + y[i + 1]) * (x[i + 1] - x[i]);
    }
    Ok(sum)
}

/// Complete Fermi-Dirac integral of order 1/2, normalized by Gamma(3/2)
///
/// F_{1/2}(eta) = (1/Gamma(3/2)) Int_0^inf sqrt(x) / (1 + exp(x - eta)) dx
///
/// With this normalization F_{1/2}(eta) -> exp(eta) in the non-degenerate
/// limit, so n = N_c F_{1/2}(eta). The substitution x = u^2 keeps the
/// integrand smooth at the origin.
pub fn fermi_dirac_half(eta: f64) -> f64 {
    let u_max = (eta.max(0.0) + 40.0).sqrt();
    let du = u_max / FD_SAMPLES as f64;
    let mut sum = 0.0;
    for i in 0..=FD_SAMPLES {
        let u = i as f64 * du;
        // exp overflow gives +inf and a harmless zero contribution
        let f = 2.0 * u * u / ((u * u - eta).exp() + 1.0);
        let w = if i == 0 || i == FD_SAMPLES { 0.5 } else { 1.0 };
        sum += w * f;
    }
    sum * du / GAMMA_THREE_HALVES
}

/// Complete Fermi-Dirac integral of order -1/2, normalized by Gamma(1/2)
///
/// Related to the order-1/2 integral by d F_{1/2} / d eta = F_{-1/2}; it
/// enters the generalized Debye screening length.
pub fn fermi_dirac_minus_half(eta: f64) -> f64 {
    let u_max = (eta.max(0.0) + 40.0).sqrt();
    let du = u_max / FD_SAMPLES as f64;
    let mut sum = 0.0;
    for i in 0..=FD_SAMPLES {
        let u = i as f64 * du;
        let f = 2.0 / ((u * u - eta).exp() + 1.0);
        let w = if i == 0 || i == FD_SAMPLES { 0.5 } else { 1.0 };
        sum += w * f;
    }
    sum * du / GAMMA_ONE_HALF
}

/// Bessel function of the first kind J1(x)
///
/// Rational approximations from Abramowitz & Stegun (9.4.4 and 9.4.6),
/// accurate to better than 1e-7 over the real line.
pub fn bessel_j1(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let p1 = x * (72362614232.0
            + y * (-7895059235.0
                + y * (242396853.1
                    + y * (-2972611.439 + y * (15704.48260 + y * (-30.16036606))))));
        let p2 = 144725228442.0
            + y * (2300535178.0
                + y * (18583304.74 + y * (99447.43394 + y * (376.9991397 + y))));
        p1 / p2
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 2.356194491;
        let p1 = 1.0
            + y * (0.183105e-2
                + y * (-0.3516396496e-4 + y * (0.2457520174e-5 + y * (-0.240337019e-6))));
        let p2 = 0.04687499995
            + y * (-0.2002690873e-3
                + y * (0.8449199096e-5 + y * (-0.88228987e-6 + y * 0.105787412e-6)));
        let ans = (0.636619772 / ax).sqrt() * (xx.cos() * p1 - z * xx.sin() * p2);
        if x < 0.0 {
            -ans
        } else {
            ans
        }
    }
}

/// Bracketed bisection root finder
///
/// # Arguments
///
/// * `f` - The function whose root is sought
/// * `lo`, `hi` - Bracket with f(lo) and f(hi) of opposite sign
/// * `f_tolerance` - Absolute tolerance on |f| at the accepted root
/// * `max_iterations` - Iteration cap before giving up
///
/// # Returns
///
/// The root, or an error if the bracket is invalid or the iteration cap is
/// exhausted before |f| falls below the tolerance.
pub fn bisect<F>(
    mut f: F,
    mut lo: f64,
    mut hi: f64,
    f_tolerance: f64,
    max_iterations: usize,
) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    if !(lo < hi) {
        return Err(UtilsError::Math(format!(
            "invalid bracket [{lo}, {hi}]"
        )));
    }
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo.abs() <= f_tolerance {
        return Ok(lo);
    }
    if f_hi.abs() <= f_tolerance {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(UtilsError::Math(format!(
            "root not bracketed by [{lo}, {hi}]"
        )));
    }

    for _ in 0..max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid.abs() <= f_tolerance {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Err(UtilsError::Math(format!(
        "bisection did not converge within {max_iterations} iterations"
    )))
}

/// Volume of a sphere of radius r
pub fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}
