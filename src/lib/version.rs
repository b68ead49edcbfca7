pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nHargreaves-Samani reference evapotranspiration\n",
    "solar constant 1367 W/m2, FAO-56 solar geometry"
);

pub const FULL_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));
