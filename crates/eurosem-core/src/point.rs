//! Per-point evaluation of all three rates.
//!
//! Transport capacity is computed first and fed to flow detachment as TC.
//! `net_erosion = DR + DF` is the source term e(x,t) of the sediment mass
//! balance; integrating that balance is left to the caller.
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::params::PointInputs;

#[cfg(feature = "threading")]
use rayon::prelude::*;

/// Rates at one point, all in m³/s/m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRates {
    pub rainfall_detachment: f64,
    pub flow_detachment: f64,
    pub transport_capacity: f64,
    /// DR + DF; negative when deposition outweighs detachment.
    pub net_erosion: f64,
}

pub fn evaluate_point(p: &PointInputs) -> Result<PointRates, DomainError> {
    let rainfall_detachment = p.rainfall.detachment()?;
    let transport_capacity = p.transport.capacity()?;
    let flow_detachment = p.flow.with_capacity(transport_capacity).detachment()?;
    Ok(PointRates {
        rainfall_detachment,
        flow_detachment,
        transport_capacity,
        net_erosion: rainfall_detachment + flow_detachment,
    })
}

/// Evaluate every point independently.  Output order matches input order;
/// runs on the rayon pool when the `threading` feature is enabled.
pub fn evaluate_points(points: &[PointInputs]) -> Vec<Result<PointRates, DomainError>> {
    #[cfg(feature = "threading")]
    {
        points.par_iter().map(evaluate_point).collect()
    }
    #[cfg(not(feature = "threading"))]
    {
        points.iter().map(evaluate_point).collect()
    }
}
