// Hargreaves, G.H., Samani, Z.A. (1985). Reference crop evapotranspiration from temperature.
pub const HS_COEFF: f64 = 0.0135;
pub const HS_TEMP_OFFSET: f64 = 17.8; // [°C]
pub const HS_POW: f64 = 0.5;

// relative sun-earth distance
pub const DR_AMPLITUDE: f64 = 0.03344;
pub const DR_PHASE: f64 = 0.048869; // [rad]
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const KRS_INTERIOR: f64 = 0.16;
pub const KRS_COASTAL: f64 = 0.19;
