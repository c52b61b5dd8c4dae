/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Golden-rule nanopore scattering rates
//!
//! The pore is a boxcar potential of height U0 (the electron affinity). For
//! elastic scattering the golden-rule rate at energy E is an integral of
//! |M(q)|^2 (1 - cos theta) over the isoenergetic surface of the ellipsoidal
//! valley, with M(q) the Fourier transform of the pore potential:
//!
//! tau_np^-1(k) = (2 pi / hbar) (N / (2 pi)^3) Int |M(q)|^2 (1 - cos theta)
//!                / |grad_k' E| dS'
//!
//! Spheres integrate over a (nu, theta) parametrization of the ellipsoid with
//! the analytic surface Jacobian; cylinders (axis along z, perpendicular to
//! transport) conserve k_z and integrate over the in-plane isoenergy ellipse.
//! The incident state sits on the surface along the valley's transport axis.
//! All wavevectors are measured from the band minimum: the valley offset
//! cancels out of the momentum transfer, and the (1 - cos theta) weight uses
//! the angle between the valley-frame wavevectors, which is the angle the
//! carrier velocity turns through. The k-space geometry is done in joules.

use super::{PoreGeometry, PoreShape};
use crate::band::EnergyGrid;
use crate::fermi::CarrierState;
use crate::material::MaterialParameters;
use crate::scattering::errors::Result;
use crate::scattering::ScatteringMechanism;
use crate::utils::constants::{ELEMENTARY_CHARGE, HBAR_J};
use crate::utils::math::bessel_j1;
use ndarray::Array1;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Polar samples over the ellipsoid surface
const POLAR_SAMPLES: usize = 32;
/// Azimuthal samples over the ellipsoid surface / ellipse perimeter
const AZIMUTHAL_SAMPLES: usize = 64;

/// Nanopore scattering mechanism computed from pore geometry
#[derive(Debug, Clone, Copy)]
pub struct NanoporeScattering {
    geometry: PoreGeometry,
}

impl NanoporeScattering {
    pub fn new(geometry: PoreGeometry) -> Self {
        Self { geometry }
    }

    /// The configured pore geometry
    pub fn geometry(&self) -> &PoreGeometry {
        &self.geometry
    }
}

impl ScatteringMechanism for NanoporeScattering {
    fn label(&self) -> &'static str {
        "nanopore"
    }

    fn inverse_lifetimes(
        &self,
        grid: &EnergyGrid,
        material: &MaterialParameters,
        _carrier: &CarrierState,
    ) -> Result<Array1<f64>> {
        self.geometry.validate()?;
        if self.geometry.porosity == 0.0 {
            // no pores, exactly zero contribution
            return Ok(Array1::zeros(grid.len()));
        }

        let masses = [
            material.axis_mass(0),
            material.axis_mass(1),
            material.axis_mass(2),
        ];
        let u0 = material.electron_affinity * ELEMENTARY_CHARGE;
        let radius = self.geometry.shape.radius();
        let density = self.geometry.number_density();

        let rates: Vec<f64> = grid
            .energy()
            .iter()
            .map(|&e| e * ELEMENTARY_CHARGE)
            .collect::<Vec<f64>>()
            .into_par_iter()
            .map(|e_j| match self.geometry.shape {
                PoreShape::Sphere { .. } => sphere_rate(e_j, radius, density, u0, &masses),
                PoreShape::Cylinder { .. } => cylinder_rate(e_j, radius, density, u0, &masses),
            })
            .collect();

        Ok(Array1::from_vec(rates))
    }
}

/// Fourier transform of a spherical boxcar of unit height, in m^3
///
/// F(q) = 4 pi (sin(q r0) - q r0 cos(q r0)) / q^3, with the q -> 0 limit
/// equal to the pore volume.
fn sphere_form_factor(q: f64, radius: f64) -> f64 {
    let x = q * radius;
    if x < 1.0e-4 {
        4.0 / 3.0 * PI * radius.powi(3) * (1.0 - x * x / 10.0)
    } else {
        4.0 * PI * (x.sin() - x * x.cos()) / q.powi(3)
    }
}

/// In-plane Fourier transform of a cylindrical boxcar per unit length, in m^2
///
/// F(q) = 2 pi r0 J1(q r0) / q, with the q -> 0 limit pi r0^2.
fn cylinder_form_factor(q: f64, radius: f64) -> f64 {
    let x = q * radius;
    if x < 1.0e-4 {
        PI * radius.powi(2) * (1.0 - x * x / 8.0)
    } else {
        2.0 * PI * radius * bessel_j1(x) / q
    }
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(a: &[f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

/// Nanopore rate at one energy for spherical pores, in 1/s
///
/// `e_j` is the carrier energy in J above the band edge, `density` the pore
/// count per m^3.
fn sphere_rate(e_j: f64, radius: f64, density: f64, u0: f64, masses: &[f64; 3]) -> f64 {
    if e_j <= 0.0 {
        return 0.0;
    }
    // isoenergy ellipsoid semiaxes in k-space
    let a = (2.0 * masses[0] * e_j).sqrt() / HBAR_J;
    let b = (2.0 * masses[1] * e_j).sqrt() / HBAR_J;
    let c = (2.0 * masses[2] * e_j).sqrt() / HBAR_J;

    // incident state on the surface along the transport axis, valley frame
    let k_in = [a, 0.0, 0.0];

    let d_nu = PI / POLAR_SAMPLES as f64;
    let d_theta = 2.0 * PI / AZIMUTHAL_SAMPLES as f64;

    let mut sum = 0.0;
    for j in 0..POLAR_SAMPLES {
        let nu = (j as f64 + 0.5) * d_nu;
        let (sin_nu, cos_nu) = nu.sin_cos();
        for i in 0..AZIMUTHAL_SAMPLES {
            let theta = (i as f64 + 0.5) * d_theta;
            let (sin_th, cos_th) = theta.sin_cos();

            let k_out = [a * sin_nu * cos_th, b * sin_nu * sin_th, c * cos_nu];

            // |r_nu x r_theta| for the ellipsoid parametrization
            let jacobian = sin_nu
                * ((b * c * sin_nu * cos_th).powi(2)
                    + (a * c * sin_nu * sin_th).powi(2)
                    + (a * b * cos_nu).powi(2))
                .sqrt();

            let gradient = HBAR_J.powi(2)
                * ((k_out[0] / masses[0]).powi(2)
                    + (k_out[1] / masses[1]).powi(2)
                    + (k_out[2] / masses[2]).powi(2))
                .sqrt();

            let q = [k_in[0] - k_out[0], k_in[1] - k_out[1], k_in[2] - k_out[2]];
            let matrix_element = u0 * sphere_form_factor(norm(&q), radius);
            let cos_angle = dot(&k_in, &k_out) / (a * norm(&k_out));

            sum += matrix_element.powi(2) * (1.0 - cos_angle) * jacobian / gradient;
        }
    }

    // (2 pi / hbar) N / (2 pi)^3 = N / (4 pi^2 hbar)
    density / (4.0 * PI.powi(2) * HBAR_J) * sum * d_nu * d_theta
}

/// Nanopore rate at one energy for cylindrical pores along z, in 1/s
///
/// k_z is conserved; `density` is the pore count per m^2 of cross-section.
fn cylinder_rate(e_j: f64, radius: f64, density: f64, u0: f64, masses: &[f64; 3]) -> f64 {
    if e_j <= 0.0 {
        return 0.0;
    }
    // in-plane isoenergy ellipse semiaxes
    let a = (2.0 * masses[0] * e_j).sqrt() / HBAR_J;
    let b = (2.0 * masses[1] * e_j).sqrt() / HBAR_J;

    // incident state on the ellipse along the transport axis, valley frame
    let k_in = [a, 0.0, 0.0];

    let samples = AZIMUTHAL_SAMPLES * 2;
    let dt = 2.0 * PI / samples as f64;

    let mut sum = 0.0;
    for i in 0..samples {
        let t = (i as f64 + 0.5) * dt;
        let (sin_t, cos_t) = t.sin_cos();

        let k_out = [a * cos_t, b * sin_t, 0.0];

        let line_element = ((a * sin_t).powi(2) + (b * cos_t).powi(2)).sqrt();
        let gradient = HBAR_J.powi(2)
            * ((k_out[0] / masses[0]).powi(2) + (k_out[1] / masses[1]).powi(2)).sqrt();

        let q = [k_in[0] - k_out[0], k_in[1] - k_out[1], 0.0];
        let matrix_element = u0 * cylinder_form_factor(norm(&q), radius);
        let cos_angle = dot(&k_in, &k_out) / (a * norm(&k_out));

        sum += matrix_element.powi(2) * (1.0 - cos_angle) * line_element / gradient;
    }

    // (2 pi / hbar) N / (2 pi)^2 = N / (2 pi hbar)
    density / (2.0 * PI * HBAR_J) * sum * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::silicon;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_form_factor_limits_to_the_pore_volume() {
        let r = 2.0e-9;
        assert_relative_eq!(
            sphere_form_factor(1.0, r),
            4.0 / 3.0 * PI * r.powi(3),
            max_relative = 1e-6
        );
    }

    #[test]
    fn cylinder_form_factor_limits_to_the_cross_section() {
        let r = 2.0e-9;
        assert_relative_eq!(
            cylinder_form_factor(1.0, r),
            PI * r.powi(2),
            max_relative = 1e-6
        );
    }

    #[test]
    fn form_factors_decay_at_large_q() {
        let r = 2.0e-9;
        let q_low = 0.5 / r;
        let q_high = 20.0 / r;
        assert!(sphere_form_factor(q_high, r).abs() < sphere_form_factor(q_low, r).abs());
        assert!(cylinder_form_factor(q_high, r).abs() < cylinder_form_factor(q_low, r).abs());
    }

    #[test]
    fn zero_porosity_gives_exactly_zero_rates() {
        let si = silicon();
        let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 200).unwrap();
        let mechanism = NanoporeScattering::new(
            PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 0.0).unwrap(),
        );
        let carrier = CarrierState {
            concentration: 1.0e25,
            temperature: 300.0,
            fermi_level: 0.05,
        };
        let rates = mechanism.inverse_lifetimes(&grid, &si, &carrier).unwrap();
        assert!(rates.iter().all(|&r| r == 0.0));
    }

    #[test]
    fn low_energy_carriers_scatter_hardest() {
        // the energy-filtering asymmetry at the default 2 nm radius: the rate
        // through the thermally occupied window falls off with energy
        let si = silicon();
        let masses = [si.axis_mass(0), si.axis_mass(1), si.axis_mass(2)];
        let u0 = si.electron_affinity * ELEMENTARY_CHARGE;
        let radius: f64 = 2.0e-9;
        let density = 0.05 / (4.0 / 3.0 * PI * radius.powi(3));
        let rate = |e_ev: f64| sphere_rate(e_ev * ELEMENTARY_CHARGE, radius, density, u0, &masses);
        assert!(rate(0.01) > rate(0.05));
        assert!(rate(0.05) > rate(0.1));
        assert!(rate(0.1) > rate(0.3));
    }

    #[test]
    fn rates_are_positive_above_the_band_edge() {
        let si = silicon();
        let grid = EnergyGrid::analytic(&si, 0.0, 0.5, 100).unwrap();
        let mechanism = NanoporeScattering::new(
            PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 0.05).unwrap(),
        );
        let carrier = CarrierState {
            concentration: 1.0e25,
            temperature: 300.0,
            fermi_level: 0.05,
        };
        let rates = mechanism.inverse_lifetimes(&grid, &si, &carrier).unwrap();
        assert_eq!(rates[0], 0.0);
        assert!(rates.iter().skip(1).all(|&r| r > 0.0 && r.is_finite()));
    }
}
