use serde_derive::Serialize;

use crate::constants::NODATAVAL;

/// OutputElement is the daily result of the Hargreaves-Samani estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputElement {
    /// day of year [1-366]
    pub day_of_year: f64,
    /// extraterrestrial radiation [MJ m-2 day-1]
    pub ra: f64,
    /// reference evapotranspiration [mm day-1]
    pub et0: f64,
    /// minimum air temperature [°C]
    pub tmin: f64,
    /// maximum air temperature [°C]
    pub tmax: f64,
}

impl Default for OutputElement {
    fn default() -> Self {
        Self {
            day_of_year: NODATAVAL,
            ra: NODATAVAL,
            et0: NODATAVAL,
            tmin: NODATAVAL,
            tmax: NODATAVAL,
        }
    }
}

impl OutputElement {
    pub fn et0(&self) -> Option<f64> {
        if self.et0 == NODATAVAL {
            None
        } else {
            Some(self.et0)
        }
    }
}
