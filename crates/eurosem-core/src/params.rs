use serde::{Deserialize, Serialize};

use crate::detachment::flow::flow_detachment;
use crate::detachment::rainfall::{rainfall_detachment, rainfall_kinetic_energy};
use crate::error::DomainError;
use crate::transport::transport_capacity;

/// Inputs to rainfall detachment at one point.
/// Defaults describe a lightly vegetated loam under 10 mm/hr rain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RainfallInputs {
    /// Rainfall intensity (mm/hr), > 0.
    pub rainfall: f64,
    /// Depth of direct throughfall (m).
    pub direct_throughfall: f64,
    /// Effective plant-canopy height (m), ≥ 0.
    pub canopy_height: f64,
    /// Depth of leaf drainage (m).
    pub leaf_drainage: f64,
    /// Soil detachability index k.
    pub detachability: f64,
    /// Particle density (kg/m³).
    pub particle_density: f64,
    /// Soil-texture exponent z, typically 0.9-3.1.
    pub texture_exponent: f64,
    /// Mean surface-water depth (m).
    pub water_depth: f64,
    /// Fraction of surface covered by non-erodible material, 0-1.
    pub pavement: f64,
}

impl Default for RainfallInputs {
    fn default() -> Self {
        Self {
            rainfall: 10.0,
            direct_throughfall: 0.008,
            canopy_height: 1.0,
            leaf_drainage: 0.002,
            detachability: 30.0,
            particle_density: 2650.0,
            texture_exponent: 2.0,
            water_depth: 0.005,
            pavement: 0.2,
        }
    }
}

impl RainfallInputs {
    pub fn kinetic_energy(&self) -> Result<f64, DomainError> {
        rainfall_kinetic_energy(
            self.rainfall,
            self.direct_throughfall,
            self.canopy_height,
            self.leaf_drainage,
        )
    }

    pub fn detachment(&self) -> Result<f64, DomainError> {
        rainfall_detachment(
            self.rainfall,
            self.direct_throughfall,
            self.canopy_height,
            self.leaf_drainage,
            self.detachability,
            self.particle_density,
            self.texture_exponent,
            self.water_depth,
            self.pavement,
        )
    }
}

/// Inputs to flow detachment with a known transport capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowInputs {
    /// Soil cohesion (kPa).
    pub cohesion: f64,
    /// Flow width (m).
    pub width: f64,
    /// Particle settling velocity (m/s).
    pub settling_velocity: f64,
    /// Transport capacity of the flow (m³/s/m).
    pub transport_capacity: f64,
    /// Sediment already in the flow, same units as `transport_capacity`.
    pub concentration: f64,
}

impl Default for FlowInputs {
    fn default() -> Self {
        FlowState::default().with_capacity(0.004)
    }
}

impl FlowInputs {
    pub fn detachment(&self) -> Result<f64, DomainError> {
        flow_detachment(
            self.cohesion,
            self.width,
            self.settling_velocity,
            self.transport_capacity,
            self.concentration,
        )
    }
}

/// Flow-detachment inputs measured at a point; the transport capacity is
/// supplied by `TransportInputs` at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowState {
    /// Soil cohesion (kPa).
    pub cohesion: f64,
    /// Flow width (m).
    pub width: f64,
    /// Particle settling velocity (m/s).
    pub settling_velocity: f64,
    /// Sediment already in the flow (m³/s/m).
    pub concentration: f64,
}

impl Default for FlowState {
    fn default() -> Self {
        Self {
            cohesion: 2.0,
            width: 0.5,
            settling_velocity: 0.01,
            concentration: 0.0001,
        }
    }
}

impl FlowState {
    pub fn with_capacity(self, transport_capacity: f64) -> FlowInputs {
        FlowInputs {
            cohesion: self.cohesion,
            width: self.width,
            settling_velocity: self.settling_velocity,
            transport_capacity,
            concentration: self.concentration,
        }
    }
}

/// Inputs to the transport capacity equation.
/// Defaults sit above critical stream power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportInputs {
    /// Median particle size (mm).
    pub d_50: f64,
    /// Mean flow velocity (m/s).
    pub velocity: f64,
    /// Slope (%).
    pub slope: f64,
    /// Shear velocity (m/s).
    pub shear_velocity: f64,
    /// Modified Shields critical shear parameter.
    pub shields_critical: f64,
    /// Mean surface-water depth (m).
    pub water_depth: f64,
    /// Particle density (kg/m³).
    pub particle_density: f64,
    /// Discharge; calibration input, unit as supplied by the caller.
    pub discharge: f64,
    /// Exponent divisor n in (Pi − Pi_crit)^(0.7/n).
    pub exponent: f64,
}

impl Default for TransportInputs {
    fn default() -> Self {
        Self {
            d_50: 0.001,
            velocity: 0.5,
            slope: 2.0,
            shear_velocity: 1.5,
            shields_critical: 0.05,
            water_depth: 0.01,
            particle_density: 2650.0,
            discharge: 0.001,
            exponent: 2.0,
        }
    }
}

impl TransportInputs {
    pub fn capacity(&self) -> Result<f64, DomainError> {
        transport_capacity(
            self.d_50,
            self.velocity,
            self.slope,
            self.shear_velocity,
            self.shields_critical,
            self.water_depth,
            self.particle_density,
            self.discharge,
            self.exponent,
        )
    }
}

/// Everything needed to evaluate all three rates at one point and instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointInputs {
    pub rainfall: RainfallInputs,
    pub transport: TransportInputs,
    pub flow: FlowState,
}
