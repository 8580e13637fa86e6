//! Detachment by overland-flow shear.
//!
//!   DF = β · w · vs · (TC − C)
//!
//! β is the detachment efficiency: 1 for cohesionless soil (J < 1 kPa),
//! otherwise 0.79·exp(−0.85·J).  DF is negative when the flow carries more
//! sediment than its capacity, i.e. net deposition; it is never clamped.
use crate::checks;
use crate::constants::{COHESIONLESS_LIMIT_KPA, COHESION_EFFICIENCY_DECAY, COHESION_EFFICIENCY_SCALE};
use crate::error::{DomainError, Formula};

const F: Formula = Formula::FlowDetachment;

/// Detachment efficiency β for soil cohesion `j` (kPa).
///
/// The branch is strict: `j = 1.0` already takes the exponential arm.
pub fn cohesion_efficiency(j: f64) -> f64 {
    if j < COHESIONLESS_LIMIT_KPA {
        1.0
    } else {
        COHESION_EFFICIENCY_SCALE * (-COHESION_EFFICIENCY_DECAY * j).exp()
    }
}

/// Flow detachment rate DF (m³/s/m).
///
/// * `j` — soil cohesion (kPa).
/// * `w` — flow width (m).
/// * `v_s` — particle settling velocity (m/s).
/// * `tc` — transport capacity of the flow.
/// * `c` — sediment already carried, same units as `tc`.
pub fn flow_detachment(j: f64, w: f64, v_s: f64, tc: f64, c: f64) -> Result<f64, DomainError> {
    let j = checks::finite(F, "J", j)?;
    let w = checks::finite(F, "w", w)?;
    let v_s = checks::finite(F, "v_s", v_s)?;
    let tc = checks::finite(F, "TC", tc)?;
    let c = checks::finite(F, "C", c)?;

    let beta = cohesion_efficiency(j);
    let df = beta * w * v_s * (tc - c);
    checks::finite_result(F, "DF", df)
}
