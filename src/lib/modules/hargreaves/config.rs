use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::{
    constants::{KRS_COASTAL, KRS_INTERIOR},
    functions::et0_from_radiation,
};
use crate::{
    constants::{DEFAULT_KRS, DEFAULT_LATENT_HEAT, DEFAULT_LATITUDE},
    error::Et0Error,
};

/// Climate regime, selects the radiation adjustment coefficient kRs
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    /// interior locations
    Interior,
    /// coastal locations, where air masses are influenced by a nearby water body
    Coastal,
}

impl Climate {
    pub fn krs(&self) -> f64 {
        match self {
            Climate::Interior => KRS_INTERIOR,
            Climate::Coastal => KRS_COASTAL,
        }
    }
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_latent_heat() -> f64 {
    DEFAULT_LATENT_HEAT
}

fn default_krs() -> f64 {
    DEFAULT_KRS
}

fn default_model_version() -> String {
    "legacy".to_owned()
}

/// Parameters of the Hargreaves-Samani estimator, readable from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HargreavesConfig {
    /// latitude [°], documented range 0-67
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// latent heat of vaporization [MJ kg-1]
    #[serde(default = "default_latent_heat", alias = "lam")]
    pub latent_heat: f64,
    /// radiation adjustment coefficient, overridden by `climate` when given
    #[serde(default = "default_krs", alias = "kRs")]
    pub krs: f64,
    #[serde(default)]
    pub climate: Option<Climate>,
    #[serde(default = "default_model_version")]
    pub model_version: String,
}

impl Default for HargreavesConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            latent_heat: DEFAULT_LATENT_HEAT,
            krs: DEFAULT_KRS,
            climate: None,
            model_version: default_model_version(),
        }
    }
}

impl HargreavesConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, String> {
        serde_yaml::from_str(contents).map_err(|err| format!("Cannot parse configuration: {}", err))
    }

    /// kRs actually used: the climate preset wins over the raw coefficient
    pub fn effective_krs(&self) -> f64 {
        match self.climate {
            Some(climate) => climate.krs(),
            None => self.krs,
        }
    }

    pub fn validate(&self) -> Result<(), Et0Error> {
        if self.latent_heat == 0.0 || !self.latent_heat.is_finite() {
            return Err(Et0Error::Configuration {
                lam: self.latent_heat,
            });
        }
        Ok(())
    }
}

/// configuration structure for model config
/// can be used to store functions and constants
#[derive(Debug)]
pub struct HargreavesModelConfig {
    pub model_version: String,
    et0_fn: fn(f64, f64, f64, f64, f64) -> Result<f64, Et0Error>,
}

impl HargreavesModelConfig {
    pub fn new(model_version_str: &str) -> Self {
        let et0_fn: fn(f64, f64, f64, f64, f64) -> Result<f64, Et0Error>;
        match model_version_str {
            "legacy" => {
                et0_fn = et0_from_radiation;
            }
            _ => {
                log::warn!("Unknown model version '{}', using legacy", model_version_str);
                et0_fn = et0_from_radiation;
            }
        }

        HargreavesModelConfig {
            model_version: model_version_str.to_owned(),
            et0_fn,
        }
    }

    pub fn et0(
        &self,
        tmin: f64, // minimum air temperature [°C]
        tmax: f64, // maximum air temperature [°C]
        ra: f64,   // extraterrestrial radiation [MJ m-2 day-1]
        lam: f64,  // latent heat of vaporization [MJ kg-1]
        krs: f64,  // radiation adjustment coefficient [-]
    ) -> Result<f64, Et0Error> {
        (self.et0_fn)(tmin, tmax, ra, lam, krs)
    }
}
