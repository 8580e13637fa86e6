//! Soil detachment at a point: raindrop impact and overland-flow shear.
//! Both rates are volumetric per unit width (m³/s/m).
pub mod flow;
pub mod rainfall;
