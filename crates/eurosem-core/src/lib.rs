//! Point-scale EUROSEM erosion equations: soil detachment by raindrop impact,
//! detachment by overland-flow shear, and the flow's transport capacity.
//!
//! Every function is a pure mapping from physical measurements to a rate.
//! Spatial discretisation, time stepping and the sediment mass balance
//! `∂(AC)/∂t + ∂(QC)/∂x − e(x,t) = q_s(x,t)` belong to the caller; this crate
//! supplies `e = DR + DF` and the transport capacity at each evaluation point.
pub mod constants;
pub mod detachment;
pub mod error;
pub mod params;
pub mod point;
pub mod transport;

mod checks;

pub use detachment::flow::{cohesion_efficiency, flow_detachment};
pub use detachment::rainfall::{rainfall_detachment, rainfall_kinetic_energy};
pub use error::{DomainError, Formula};
pub use params::{FlowInputs, FlowState, PointInputs, RainfallInputs, TransportInputs};
pub use point::{evaluate_point, evaluate_points, PointRates};
pub use transport::transport_capacity;
