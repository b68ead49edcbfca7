/// missing value sentinel used by the output records
pub const NODATAVAL: f64 = -9999.0;

/// solar constant [W/m2]
pub const SOLAR_CONSTANT: f64 = 1367.0;
/// seconds in a day [s]
pub const SECONDS_PER_DAY: f64 = 86400.0;
/// J -> MJ
pub const J_TO_MJ: f64 = 1_000_000.0;

pub const DEFAULT_LATITUDE: f64 = 44.0; // [°]
pub const DEFAULT_LATENT_HEAT: f64 = 2.45; // [MJ/kg]
pub const DEFAULT_KRS: f64 = 0.16; // interior regions

/// format token for the zero-padded day of year
pub const DAY_OF_YEAR_FMT: &str = "%j";
/// the only accepted textual date layout
pub const ISO_DATE_FMT: &str = "%Y-%m-%d";
