//! Physical constants and the empirical coefficients of the EUROSEM
//! detachment and transport equations (Morgan et al., 1998).

/// Gravitational acceleration (m/s²).
pub const G: f64 = 9.81;

// ── Rainfall kinetic energy ───────────────────────────────────────────────────

/// Direct-throughfall energy: KE_DT = (8.95 + 8.44·log10(I)) · DT.
pub const THROUGHFALL_KE_INTERCEPT: f64 = 8.95;
pub const THROUGHFALL_KE_LOG_SLOPE: f64 = 8.44;

/// Leaf-drainage energy: KE_LD = (15.8·√PH − 5.87) · LD.
pub const LEAF_DRAINAGE_KE_SLOPE: f64 = 15.8;
pub const LEAF_DRAINAGE_KE_INTERCEPT: f64 = -5.87;

// ── Flow detachment ───────────────────────────────────────────────────────────

/// Cohesion (kPa) below which soil is treated as cohesionless (Beta = 1).
pub const COHESIONLESS_LIMIT_KPA: f64 = 1.0;
pub const COHESION_EFFICIENCY_SCALE: f64 = 0.79;
pub const COHESION_EFFICIENCY_DECAY: f64 = 0.85;

// ── Transport capacity ────────────────────────────────────────────────────────

/// b = (19 − d50/30) / 10⁴.
pub const INTERRILL_B_INTERCEPT: f64 = 19.0;
pub const INTERRILL_B_D50_DIVISOR: f64 = 30.0;
pub const INTERRILL_B_SCALE: f64 = 1.0e4;

/// Stream power Pi = (U·u)^1.5 / h^(2/3).
pub const STREAM_POWER_EXPONENT: f64 = 1.5;
pub const STREAM_POWER_DEPTH_EXPONENT: f64 = 2.0 / 3.0;

/// Numerator of the interrill exponent 0.7/n.
pub const INTERRILL_EXPONENT_NUMERATOR: f64 = 0.7;
pub const INTERRILL_OUTER_POWER: i32 = 5;
