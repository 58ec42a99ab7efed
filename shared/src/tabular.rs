use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid number for {field}: {raw:?}")]
    InvalidNumber { field: TabularField, raw: String },
    #[error("Solar radiation must be 0, 1 or 2, got {0}")]
    InvalidSolarRadiation(f64),
}

/// Solar radiation level, sent to the API as 0, 1 or 2.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum SolarRadiation {
    Low,
    #[default]
    Moderate,
    High,
}

impl SolarRadiation {
    pub fn code(self) -> u8 {
        match self {
            SolarRadiation::Low => 0,
            SolarRadiation::Moderate => 1,
            SolarRadiation::High => 2,
        }
    }

    pub fn from_f64(value: f64) -> Result<Self, FieldError> {
        match value {
            v if v == 0.0 => Ok(SolarRadiation::Low),
            v if v == 1.0 => Ok(SolarRadiation::Moderate),
            v if v == 2.0 => Ok(SolarRadiation::High),
            v => Err(FieldError::InvalidSolarRadiation(v)),
        }
    }
}

impl From<SolarRadiation> for u8 {
    fn from(level: SolarRadiation) -> u8 {
        level.code()
    }
}

impl TryFrom<u8> for SolarRadiation {
    type Error = FieldError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        SolarRadiation::from_f64(f64::from(code))
    }
}

/// The ten inputs of the tabular form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TabularField {
    WindSpeed,
    Precipitation,
    Temperature,
    Humidity,
    Pressure,
    SolarRadiation,
    CloudCover,
    Visibility,
    DewPoint,
    UvIndex,
}

/// Input widget hints. Advisory only, never enforced before submit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl TabularField {
    pub fn spec(self) -> FieldSpec {
        let (label, min, max) = match self {
            TabularField::WindSpeed => ("Wind speed (km/h)", 0.0, 200.0),
            TabularField::Precipitation => ("Precipitation (%)", 0.0, 100.0),
            TabularField::Temperature => ("Temperature (°C)", -50.0, 60.0),
            TabularField::Humidity => ("Humidity (%)", 0.0, 100.0),
            TabularField::Pressure => ("Pressure (hPa)", 800.0, 1100.0),
            TabularField::SolarRadiation => ("Solar radiation", 0.0, 2.0),
            TabularField::CloudCover => ("Cloud cover (%)", 0.0, 100.0),
            TabularField::Visibility => ("Visibility (km)", 0.0, 50.0),
            TabularField::DewPoint => ("Dew point (°C)", -30.0, 30.0),
            TabularField::UvIndex => ("UV index", 0.0, 12.0),
        };
        let step = if self == TabularField::SolarRadiation { 1.0 } else { 0.1 };
        FieldSpec { label, min, max, step }
    }

    /// Looks a field up by its wire name (`"wind_speed"`, `"uv_index"`, ...).
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        name.parse().map_err(|_| FieldError::UnknownField(name.to_string()))
    }

    pub fn is_categorical(self) -> bool {
        self == TabularField::SolarRadiation
    }
}

/// One full tabular request. Every field is always present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub wind_speed: f64,
    pub precipitation: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub solar_radiation: SolarRadiation,
    pub cloud_cover: f64,
    pub visibility: f64,
    pub dew_point: f64,
    pub uv_index: f64,
}

impl Default for WeatherObservation {
    fn default() -> Self {
        Self {
            wind_speed: 10.0,
            precipitation: 50.0,
            temperature: 25.0,
            humidity: 70.0,
            pressure: 1013.0,
            solar_radiation: SolarRadiation::Moderate,
            cloud_cover: 50.0,
            visibility: 10.0,
            dew_point: 10.0,
            uv_index: 5.0,
        }
    }
}

impl WeatherObservation {
    /// Current value of a field, the categorical one as its float code.
    pub fn get(&self, field: TabularField) -> f64 {
        match field {
            TabularField::WindSpeed => self.wind_speed,
            TabularField::Precipitation => self.precipitation,
            TabularField::Temperature => self.temperature,
            TabularField::Humidity => self.humidity,
            TabularField::Pressure => self.pressure,
            TabularField::SolarRadiation => f64::from(self.solar_radiation.code()),
            TabularField::CloudCover => self.cloud_cover,
            TabularField::Visibility => self.visibility,
            TabularField::DewPoint => self.dew_point,
            TabularField::UvIndex => self.uv_index,
        }
    }

    /// Parses `raw` and overwrites exactly `field`. On error the record is
    /// left untouched.
    pub fn update_field(&mut self, field: TabularField, raw: &str) -> Result<(), FieldError> {
        let value: f64 = raw.trim().parse().map_err(|_| FieldError::InvalidNumber {
            field,
            raw: raw.to_string(),
        })?;

        let slot = match field {
            TabularField::SolarRadiation => {
                self.solar_radiation = SolarRadiation::from_f64(value)?;
                return Ok(());
            }
            TabularField::WindSpeed => &mut self.wind_speed,
            TabularField::Precipitation => &mut self.precipitation,
            TabularField::Temperature => &mut self.temperature,
            TabularField::Humidity => &mut self.humidity,
            TabularField::Pressure => &mut self.pressure,
            TabularField::CloudCover => &mut self.cloud_cover,
            TabularField::Visibility => &mut self.visibility,
            TabularField::DewPoint => &mut self.dew_point,
            TabularField::UvIndex => &mut self.uv_index,
        };
        *slot = value;
        Ok(())
    }
}
