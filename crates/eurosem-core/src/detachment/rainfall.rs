//! Detachment by raindrop impact.
//!
//!   KE = (8.95 + 8.44·log10(I))·DT + (15.8·√PH − 5.87)·LD
//!   DR = (k / ρs) · KE · exp(−z·h) · (1 − PAVE)
//!
//! The first KE term is direct throughfall, the second leaf drainage.
//! exp(−z·h) attenuates detachment under a surface water layer of depth h;
//! (1 − PAVE) is the fraction of surface exposed to raindrops.
use crate::checks;
use crate::constants::{
    LEAF_DRAINAGE_KE_INTERCEPT, LEAF_DRAINAGE_KE_SLOPE, THROUGHFALL_KE_INTERCEPT,
    THROUGHFALL_KE_LOG_SLOPE,
};
use crate::error::{DomainError, Formula};

const F: Formula = Formula::RainfallDetachment;

/// Kinetic energy of rainfall reaching the surface (J/m²).
///
/// * `rainfall` — intensity in mm/hr, must be > 0.
/// * `dt` — depth of direct throughfall (m).
/// * `ph` — effective plant-canopy height (m), must be ≥ 0.
/// * `ld` — depth of leaf drainage (m).
pub fn rainfall_kinetic_energy(rainfall: f64, dt: f64, ph: f64, ld: f64) -> Result<f64, DomainError> {
    let rainfall = checks::finite(F, "rainfall", rainfall)?;
    let dt = checks::finite(F, "DT", dt)?;
    let ph = checks::finite(F, "PH", ph)?;
    let ld = checks::finite(F, "LD", ld)?;

    let log_i = checks::log10(F, "rainfall", rainfall)?;
    let sqrt_ph = checks::powf(F, "PH", ph, 0.5)?;

    let throughfall = (THROUGHFALL_KE_INTERCEPT + THROUGHFALL_KE_LOG_SLOPE * log_i) * dt;
    let leaf_drainage = (LEAF_DRAINAGE_KE_SLOPE * sqrt_ph + LEAF_DRAINAGE_KE_INTERCEPT) * ld;
    Ok(throughfall + leaf_drainage)
}

/// Rainfall detachment rate DR (m³/s/m).
///
/// The sign is not clamped; physically valid parameters give DR ≥ 0.
#[allow(clippy::too_many_arguments)]
pub fn rainfall_detachment(
    rainfall: f64,
    dt: f64,
    ph: f64,
    ld: f64,
    k: f64,
    p_s: f64,
    z: f64,
    h: f64,
    pave: f64,
) -> Result<f64, DomainError> {
    let ke = rainfall_kinetic_energy(rainfall, dt, ph, ld)?;
    let k = checks::finite(F, "k", k)?;
    let p_s = checks::finite(F, "P_s", p_s)?;
    let z = checks::finite(F, "z", z)?;
    let h = checks::finite(F, "h", h)?;
    let pave = checks::finite(F, "PAVE", pave)?;
    let p_s = checks::nonzero(F, "P_s", p_s)?;

    let water_layer = (-z * h).exp();
    let dr = (k / p_s) * ke * water_layer * (1.0 - pave);
    checks::finite_result(F, "DR", dr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Lightly vegetated loam under 10 mm/hr rain.
    fn dr_with(rainfall: f64, ph: f64, h: f64, pave: f64) -> Result<f64, DomainError> {
        rainfall_detachment(rainfall, 0.008, ph, 0.002, 30.0, 2650.0, 2.0, h, pave)
    }

    #[test]
    fn matches_hand_computed_value() {
        let ke = rainfall_kinetic_energy(10.0, 0.008, 1.0, 0.002).unwrap();
        assert_relative_eq!(ke, 0.15898, max_relative = 1e-12);
        let dr = dr_with(10.0, 1.0, 0.005, 0.2).unwrap();
        assert_relative_eq!(dr, 0.0014254924308175947, max_relative = 1e-12);
    }

    #[test]
    fn bare_soil_without_water_layer() {
        // PH = 0, LD = 0, h = 0, PAVE = 0 → DR = k/ρs · 8.95+8.44 · DT.
        let dr = rainfall_detachment(10.0, 0.008, 0.0, 0.0, 30.0, 2650.0, 2.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(dr, 30.0 / 2650.0 * (8.95 + 8.44) * 0.008, max_relative = 1e-12);
    }

    #[test]
    fn zero_and_negative_rainfall_are_domain_errors() {
        for rainfall in [0.0, -1.0] {
            let err = dr_with(rainfall, 1.0, 0.005, 0.2).unwrap_err();
            assert_eq!(
                err,
                DomainError::NonPositiveLogArgument { formula: F, parameter: "rainfall", value: rainfall },
                "rainfall = {rainfall}"
            );
        }
    }

    #[test]
    fn negative_canopy_height_is_domain_error() {
        let err = dr_with(10.0, -0.5, 0.005, 0.2).unwrap_err();
        assert!(matches!(err, DomainError::NegativeFractionalBase { parameter: "PH", .. }), "{err}");
    }

    #[test]
    fn zero_particle_density_is_domain_error() {
        let err = rainfall_detachment(10.0, 0.008, 1.0, 0.002, 30.0, 0.0, 2.0, 0.005, 0.2).unwrap_err();
        assert_eq!(err, DomainError::ZeroDivisor { formula: F, parameter: "P_s" });
    }

    #[test]
    fn nan_input_is_rejected() {
        let err = dr_with(10.0, 1.0, f64::NAN, 0.2).unwrap_err();
        assert!(matches!(err, DomainError::NonFinite { parameter: "h", .. }));
    }

    #[test]
    fn non_negative_over_valid_ranges() {
        for &rain in &[1.0, 5.0, 25.0, 120.0] {
            for &h in &[0.0, 0.001, 0.05, 0.5] {
                for &pave in &[0.0, 0.3, 1.0] {
                    let dr = dr_with(rain, 2.0, h, pave).unwrap();
                    assert!(dr >= 0.0, "DR = {dr} for I={rain}, h={h}, PAVE={pave}");
                }
            }
        }
    }

    #[test]
    fn fully_paved_surface_detaches_nothing() {
        assert_eq!(dr_with(30.0, 1.0, 0.01, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn water_layer_attenuates_detachment() {
        let shallow = dr_with(20.0, 1.0, 0.001, 0.0).unwrap();
        let deep = dr_with(20.0, 1.0, 0.1, 0.0).unwrap();
        assert!(deep < shallow, "deeper water should protect the surface: {deep} vs {shallow}");
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = dr_with(17.3, 1.4, 0.003, 0.15).unwrap();
        let b = dr_with(17.3, 1.4, 0.003, 0.15).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
