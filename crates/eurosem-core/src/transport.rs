//! Transport capacity of overland flow: rill term + interrill term.
//!
//!   b        = (19 − d50/30) / 10⁴
//!   Pi       = (U·u)^1.5 / h^(2/3)           modified stream power
//!   U_crit   = √(yc · (ρs − 1) · g · d50)
//!   Pi_crit  = (U_crit·u)^1.5 / h^(2/3)
//!   TC_inter = b / (ρs·q) · ((Pi − Pi_crit)^(0.7/n) − 1)^5
//!
//! Pi_crit deliberately reuses the mean flow velocity u.  Below critical
//! stream power (Pi < Pi_crit) the fractional power has no real value and the
//! evaluation fails with `NegativeFractionalBase`; nothing is clamped.
//! `q` and `n` are opaque calibration inputs taken literally.
use crate::checks;
use crate::constants::{
    G, INTERRILL_B_D50_DIVISOR, INTERRILL_B_INTERCEPT, INTERRILL_B_SCALE,
    INTERRILL_EXPONENT_NUMERATOR, INTERRILL_OUTER_POWER, STREAM_POWER_DEPTH_EXPONENT,
    STREAM_POWER_EXPONENT,
};
use crate::error::{DomainError, Formula};

const F: Formula = Formula::TransportCapacity;

/// Particle-size coefficient b for median size `d_50` (mm).
pub fn interrill_coefficient(d_50: f64) -> f64 {
    (INTERRILL_B_INTERCEPT - d_50 / INTERRILL_B_D50_DIVISOR) / INTERRILL_B_SCALE
}

/// h^(2/3), the depth divisor shared by Pi and Pi_crit.
fn depth_factor(h: f64) -> Result<f64, DomainError> {
    let h = checks::nonzero(F, "h", h)?;
    checks::powf(F, "h", h, STREAM_POWER_DEPTH_EXPONENT)
}

fn power_over_depth(
    term: &'static str,
    result: &'static str,
    velocity_product: f64,
    depth_factor: f64,
) -> Result<f64, DomainError> {
    let num = checks::powf(F, term, velocity_product, STREAM_POWER_EXPONENT)?;
    checks::finite_result(F, result, num / depth_factor)
}

/// Modified stream power Pi = (U·u)^1.5 / h^(2/3).
///
/// `shear_velocity` and `u` in m/s, `h` in m (non-zero, non-negative).
pub fn stream_power(shear_velocity: f64, u: f64, h: f64) -> Result<f64, DomainError> {
    let shear_velocity = checks::finite(F, "U_s", shear_velocity)?;
    let u = checks::finite(F, "u", u)?;
    let h = checks::finite(F, "h", h)?;
    power_over_depth("U_s·u", "Pi", shear_velocity * u, depth_factor(h)?)
}

/// Critical shear velocity √(yc · (ρs − 1) · g · d50).
pub fn critical_shear_velocity(y_c: f64, p_s: f64, d_50: f64) -> Result<f64, DomainError> {
    let y_c = checks::finite(F, "y_c", y_c)?;
    let p_s = checks::finite(F, "P_s", p_s)?;
    let d_50 = checks::finite(F, "d_50", d_50)?;
    let u_crit = checks::sqrt(F, "y_c·(P_s−1)·g·d_50", y_c * (p_s - 1.0) * G * d_50)?;
    checks::finite_result(F, "U_s_critical", u_crit)
}

/// Rill transport capacity.
///
/// TODO: implement the rill capacity relation in d50, u and s.  Until then
/// rill transport is not modelled and this term is always zero.
pub fn rill_transport_capacity(_d_50: f64, _u: f64, _s: f64) -> f64 {
    0.0
}

/// Interrill transport capacity TC_inter.
#[allow(clippy::too_many_arguments)]
pub fn interrill_transport_capacity(
    d_50: f64,
    u: f64,
    u_s: f64,
    y_c: f64,
    h: f64,
    p_s: f64,
    q: f64,
    n: f64,
) -> Result<f64, DomainError> {
    for (name, v) in [
        ("d_50", d_50),
        ("u", u),
        ("U_s", u_s),
        ("y_c", y_c),
        ("h", h),
        ("P_s", p_s),
        ("q", q),
        ("n", n),
    ] {
        checks::finite(F, name, v)?;
    }
    let p_s = checks::nonzero(F, "P_s", p_s)?;
    let q = checks::nonzero(F, "q", q)?;
    let n = checks::nonzero(F, "n", n)?;

    let b = interrill_coefficient(d_50);
    let depth = depth_factor(h)?;
    let pi = power_over_depth("U_s·u", "Pi", u_s * u, depth)?;
    let u_crit = critical_shear_velocity(y_c, p_s, d_50)?;
    let pi_crit = power_over_depth("U_s_critical·u", "Pi_critical", u_crit * u, depth)?;

    let excess = checks::powf(F, "Pi − Pi_critical", pi - pi_crit, INTERRILL_EXPONENT_NUMERATOR / n)?;
    let tc = b / (p_s * q) * (excess - 1.0).powi(INTERRILL_OUTER_POWER);
    checks::finite_result(F, "TC_interrill", tc)
}

/// Total transport capacity of the flow (rill + interrill).
///
/// * `d_50` — median particle size (mm).
/// * `u` — mean flow velocity (m/s).
/// * `s` — slope (%); only enters the rill term.
/// * `u_s` — shear velocity (m/s).
/// * `y_c` — modified Shields critical shear parameter.
/// * `h` — mean surface-water depth (m).
/// * `p_s` — particle density (kg/m³).
/// * `q` — discharge.
/// * `n` — exponent divisor.
#[allow(clippy::too_many_arguments)]
pub fn transport_capacity(
    d_50: f64,
    u: f64,
    s: f64,
    u_s: f64,
    y_c: f64,
    h: f64,
    p_s: f64,
    q: f64,
    n: f64,
) -> Result<f64, DomainError> {
    let s = checks::finite(F, "s", s)?;
    let rill = rill_transport_capacity(d_50, u, s);
    let interrill = interrill_transport_capacity(d_50, u, u_s, y_c, h, p_s, q, n)?;
    Ok(rill + interrill)
}
