pub mod constants;
pub mod error;
pub mod models;
pub mod modules;
pub mod version;

#[cfg(feature = "python-bindings")]
pub mod python;

pub use error::Et0Error;
pub use models::input::DateInput;
pub use modules::functions::{day_of_year, daylight_hours, strftime};
pub use modules::hargreaves::functions::{extraterrestrial_radiation, hargreaves_samani};
