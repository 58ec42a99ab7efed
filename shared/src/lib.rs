pub mod config;
pub mod error;
pub mod form;
pub mod prediction;
pub mod tab;
pub mod tabular;

pub use config::{ApiConfig, ConfigError, Endpoint, DEFAULT_API_BASE};
pub use error::{ApiError, ErrorBody, GENERIC_ERROR_MESSAGE};
pub use form::{ImageForm, Outcome, PredictionPanel, TabularForm};
pub use prediction::{format_confidence, Advice, ImagePrediction, TabularPrediction};
pub use tab::Tab;
pub use tabular::{FieldError, FieldSpec, SolarRadiation, TabularField, WeatherObservation};
