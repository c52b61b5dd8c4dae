/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Porosity and electron energy filtering
//!
//! Nanoscale pores act as boxcar scattering potentials with the height of the
//! material's electron affinity. Low-energy carriers are scattered far more
//! strongly than high-energy ones, which raises the average transport energy
//! and with it the Seebeck coefficient; this asymmetry is the basis of
//! electron energy filtering. Pores are treated as dilute independent
//! scatterers (interference between pores is neglected, a known limitation of
//! the model) and additionally remove conducting volume, which is accounted
//! for by the effective-medium correction sigma_eff = (1 - phi) sigma.

pub mod errors;
mod golden_rule;

pub use golden_rule::NanoporeScattering;

use crate::transport::TransportResult;
use crate::utils::math::sphere_volume;
use errors::{PoreError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Pore shape with its characteristic size in m
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PoreShape {
    /// Spherical pore of the given radius
    Sphere { radius: f64 },
    /// Cylindrical pore of the given radius, extended along z perpendicular
    /// to the transport direction
    Cylinder { radius: f64 },
}

impl PoreShape {
    /// Characteristic radius in m
    pub fn radius(&self) -> f64 {
        match *self {
            PoreShape::Sphere { radius } | PoreShape::Cylinder { radius } => radius,
        }
    }

    /// Pore volume: m^3 for spheres, m^2 (per unit length) for cylinders
    pub fn volume(&self) -> f64 {
        match *self {
            PoreShape::Sphere { radius } => sphere_volume(radius),
            PoreShape::Cylinder { radius } => PI * radius.powi(2),
        }
    }
}

/// Pore geometry: shape plus volume fraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoreGeometry {
    /// Pore shape and size
    pub shape: PoreShape,
    /// Volume fraction phi in [0, 1)
    pub porosity: f64,
}

impl PoreGeometry {
    /// Validated pore geometry
    pub fn new(shape: PoreShape, porosity: f64) -> Result<Self> {
        let geometry = Self { shape, porosity };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check the geometric invariants
    pub fn validate(&self) -> Result<()> {
        if !(self.shape.radius() > 0.0) || !self.shape.radius().is_finite() {
            return Err(PoreError::InvalidParameter(format!(
                "pore radius must be positive, got {}",
                self.shape.radius()
            )));
        }
        if !(0.0..1.0).contains(&self.porosity) {
            return Err(PoreError::InvalidParameter(format!(
                "porosity must lie in [0, 1), got {}",
                self.porosity
            )));
        }
        Ok(())
    }

    /// Pore number density N = phi / V_pore
    ///
    /// Units follow the shape: 1/m^3 for spheres, 1/m^2 for cylinders.
    pub fn number_density(&self) -> f64 {
        self.porosity / self.shape.volume()
    }
}

/// Effective-medium conductivity of the porous material
///
/// sigma_eff = (1 - phi) sigma; the Seebeck coefficient is not corrected
/// (the volume factor cancels from its ratio of integrals).
pub fn effective_conductivity(sigma: f64, porosity: f64) -> f64 {
    (1.0 - porosity) * sigma
}

/// Apply the volumetric correction to a computed transport result
///
/// Only the conductivity and the power factor derived from it change; the
/// Seebeck coefficient and the electronic thermal conductivity pass through
/// untouched.
pub fn apply_volumetric_correction(result: &TransportResult, porosity: f64) -> TransportResult {
    let sigma = effective_conductivity(result.sigma, porosity);
    TransportResult {
        sigma,
        power_factor: sigma * result.seebeck.powi(2),
        ..result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn number_density_follows_the_shape_volume() {
        let sphere = PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 0.05).unwrap();
        assert_relative_eq!(
            sphere.number_density(),
            0.05 / (4.0 / 3.0 * PI * 8.0e-27),
            max_relative = 1e-12
        );

        let cylinder = PoreGeometry::new(PoreShape::Cylinder { radius: 2.0e-9 }, 0.05).unwrap();
        assert_relative_eq!(
            cylinder.number_density(),
            0.05 / (PI * 4.0e-18),
            max_relative = 1e-12
        );
    }

    #[test]
    fn porosity_out_of_range_is_rejected() {
        assert!(PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 1.0).is_err());
        assert!(PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, -0.1).is_err());
        assert!(PoreGeometry::new(PoreShape::Sphere { radius: 0.0 }, 0.1).is_err());
    }

    #[test]
    fn zero_porosity_is_valid() {
        let geometry = PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 0.0).unwrap();
        assert_eq!(geometry.number_density(), 0.0);
    }

    #[test]
    fn effective_conductivity_scales_exactly() {
        assert_eq!(effective_conductivity(1.0e5, 0.25), 0.75e5);
        assert_eq!(effective_conductivity(1.0e5, 0.0), 1.0e5);
    }

    #[test]
    fn geometry_round_trips_through_json() {
        let geometry = PoreGeometry::new(PoreShape::Cylinder { radius: 1.5e-9 }, 0.08).unwrap();
        let text = serde_json::to_string(&geometry).unwrap();
        let back: PoreGeometry = serde_json::from_str(&text).unwrap();
        assert_eq!(back, geometry);
    }
}
