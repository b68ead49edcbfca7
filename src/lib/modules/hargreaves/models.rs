use log::warn;

use super::{
    config::{HargreavesConfig, HargreavesModelConfig},
    functions::extraterrestrial_radiation,
};
use crate::{
    constants::J_TO_MJ,
    error::Et0Error,
    models::{
        input::{DateInput, InputElement},
        output::OutputElement,
    },
    modules::functions::day_of_year,
};

/// Radiation term of a single day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radiation {
    /// day of year [1-366]
    pub day_of_year: f64,
    /// extraterrestrial radiation [MJ m-2 day-1]
    pub ra: f64,
}

/// Hargreaves-Samani reference evapotranspiration
/// Source: Hargreaves, G.H., Samani, Z.A. (1985). Reference crop evapotranspiration from temperature.
/// Applied Engineering in Agriculture, 1(2), 96-99.
#[derive(Debug)]
pub struct HargreavesModel {
    pub config: HargreavesConfig,
    model_config: HargreavesModelConfig,
}

impl Default for HargreavesModel {
    fn default() -> Self {
        Self::new(HargreavesConfig::default())
    }
}

impl HargreavesModel {
    pub fn new(config: HargreavesConfig) -> Self {
        let model_config = HargreavesModelConfig::new(&config.model_version);
        Self {
            config,
            model_config,
        }
    }

    /// Build the model, rejecting parameters the formula cannot use
    pub fn try_new(config: HargreavesConfig) -> Result<Self, Et0Error> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Day of year and extraterrestrial radiation at the configured latitude
    pub fn radiation(&self, date: &DateInput) -> Result<Radiation, Et0Error> {
        let day_of_year = day_of_year(date)?;
        let ra = extraterrestrial_radiation(day_of_year, self.config.latitude)? / J_TO_MJ;
        Ok(Radiation { day_of_year, ra })
    }

    /// ET0 [mm day-1]; `Ok(None)` when a temperature is missing
    pub fn compute(
        &self,
        tmin: Option<f64>,
        tmax: Option<f64>,
        date: &DateInput,
    ) -> Result<Option<f64>, Et0Error> {
        let (tmin, tmax) = match (tmin, tmax) {
            (Some(tmin), Some(tmax)) => (tmin, tmax),
            _ => return Ok(None),
        };
        let radiation = self.radiation(date)?;
        self.model_config
            .et0(tmin, tmax, radiation.ra, self.config.latent_heat, self.config.effective_krs())
            .map(Some)
    }

    /// Same as `compute`, failures are logged and turned into a missing value
    pub fn compute_or_log(
        &self,
        tmin: Option<f64>,
        tmax: Option<f64>,
        date: &DateInput,
    ) -> Option<f64> {
        match self.compute(tmin, tmax, date) {
            Ok(et0) => et0,
            Err(err) => {
                warn!("Cannot compute ET0 for {:?}: {}", date, err);
                None
            }
        }
    }

    /// Daily output record, filled with NODATAVAL where nothing can be computed
    pub fn output(&self, input: &InputElement) -> OutputElement {
        let (tmin, tmax) = match (input.tmin(), input.tmax()) {
            (Some(tmin), Some(tmax)) => (tmin, tmax),
            _ => return OutputElement::default(),
        };
        let result = self.radiation(&input.date).and_then(|radiation| {
            let et0 = self.model_config.et0(
                tmin,
                tmax,
                radiation.ra,
                self.config.latent_heat,
                self.config.effective_krs(),
            )?;
            Ok((radiation.day_of_year, radiation.ra, et0))
        });
        match result {
            Ok((day_of_year, ra, et0)) => OutputElement {
                day_of_year,
                ra,
                et0,
                tmin,
                tmax,
            },
            Err(err) => {
                warn!("Cannot compute ET0 for {:?}: {}", input.date, err);
                OutputElement {
                    tmin,
                    tmax,
                    ..OutputElement::default()
                }
            }
        }
    }
}
