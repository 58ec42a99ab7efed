//! Per-module UI state. Each module owns one of these and nothing is shared
//! between them.

use crate::error::ApiError;
use crate::prediction::{ImagePrediction, TabularPrediction};
use crate::tabular::{FieldError, TabularField, WeatherObservation};
use std::collections::{HashMap, HashSet};
use strum::IntoEnumIterator;

/// Result of the last completed submission. A prediction and an error are
/// never displayed together.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Prediction(T),
    Error(String),
}

/// Busy flag plus last outcome for one module.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPanel<T> {
    busy: bool,
    outcome: Option<Outcome<T>>,
}

impl<T> Default for PredictionPanel<T> {
    fn default() -> Self {
        Self {
            busy: false,
            outcome: None,
        }
    }
}

impl<T> PredictionPanel<T> {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn outcome(&self) -> Option<&Outcome<T>> {
        self.outcome.as_ref()
    }

    /// Marks a request as in flight. Returns false if one already is.
    /// The previous outcome stays visible until the new one lands.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn resolve(&mut self, result: Result<T, ApiError>) {
        self.busy = false;
        self.outcome = Some(match result {
            Ok(prediction) => Outcome::Prediction(prediction),
            Err(err) => Outcome::Error(err.user_message()),
        });
    }

    pub fn clear(&mut self) {
        self.outcome = None;
    }
}

/// Image module state, generic over the platform file handle.
#[derive(Debug, Clone)]
pub struct ImageForm<F> {
    selected: Option<F>,
    pub panel: PredictionPanel<ImagePrediction>,
}

impl<F> Default for ImageForm<F> {
    fn default() -> Self {
        Self {
            selected: None,
            panel: PredictionPanel::default(),
        }
    }
}

impl<F: Clone> ImageForm<F> {
    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    /// Replaces the selection and drops any previous prediction or error.
    /// Ignored while a request is in flight, so a late response never lands
    /// under a different file.
    pub fn select(&mut self, file: F) -> bool {
        if self.panel.is_busy() {
            return false;
        }
        self.selected = Some(file);
        self.panel.clear();
        true
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.panel.is_busy()
    }

    /// Returns the file to upload, or `None` when there is nothing to send
    /// or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<F> {
        let file = self.selected.clone()?;
        self.panel.begin().then_some(file)
    }
}

/// Tabular module state. `drafts` holds exactly what each input shows;
/// `record` holds the last value of each field that parsed.
#[derive(Debug, Clone)]
pub struct TabularForm {
    record: WeatherObservation,
    drafts: HashMap<TabularField, String>,
    invalid: HashSet<TabularField>,
    pub panel: PredictionPanel<TabularPrediction>,
}

impl Default for TabularForm {
    fn default() -> Self {
        let record = WeatherObservation::default();
        let drafts = TabularField::iter()
            .map(|field| (field, record.get(field).to_string()))
            .collect();
        Self {
            record,
            drafts,
            invalid: HashSet::new(),
            panel: PredictionPanel::default(),
        }
    }
}

impl TabularForm {
    pub fn record(&self) -> &WeatherObservation {
        &self.record
    }

    /// Text the input for `field` should display.
    pub fn draft(&self, field: TabularField) -> &str {
        self.drafts.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn is_invalid(&self, field: TabularField) -> bool {
        self.invalid.contains(&field)
    }

    /// Keeps `raw` as the displayed text and, when it parses, writes it into
    /// the record. A failed parse marks the field invalid until fixed.
    pub fn update_field(&mut self, field: TabularField, raw: &str) -> Result<(), FieldError> {
        self.drafts.insert(field, raw.to_string());
        match self.record.update_field(field, raw) {
            Ok(()) => {
                self.invalid.remove(&field);
                Ok(())
            }
            Err(e) => {
                self.invalid.insert(field);
                Err(e)
            }
        }
    }

    pub fn update_named(&mut self, name: &str, raw: &str) -> Result<(), FieldError> {
        self.update_field(TabularField::from_name(name)?, raw)
    }

    pub fn can_submit(&self) -> bool {
        self.invalid.is_empty() && !self.panel.is_busy()
    }

    /// Snapshot of the record to send. `None` while a request is in flight
    /// or while any input shows text that did not parse.
    pub fn begin_submit(&mut self) -> Option<WeatherObservation> {
        if !self.invalid.is_empty() {
            return None;
        }
        self.panel.begin().then(|| self.record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_ERROR_MESSAGE;
    use crate::prediction::Advice;

    fn shown_prediction<T>(panel: &PredictionPanel<T>) -> Option<&T> {
        match panel.outcome() {
            Some(Outcome::Prediction(p)) => Some(p),
            _ => None,
        }
    }

    fn shown_error<T>(panel: &PredictionPanel<T>) -> Option<&str> {
        match panel.outcome() {
            Some(Outcome::Error(e)) => Some(e.as_str()),
            _ => None,
        }
    }

    fn image_prediction(label: &str) -> ImagePrediction {
        ImagePrediction {
            prediction: label.to_string(),
            confidence: 0.9,
            advice: [("general", "Ciel couvert, temps stable")].into_iter().collect(),
            all_predictions: None,
        }
    }

    fn tabular_prediction(label: &str) -> TabularPrediction {
        TabularPrediction {
            prediction: label.to_string(),
            advice: Advice::default(),
            features_used: Vec::new(),
        }
    }

    #[test]
    fn submit_without_file_is_a_no_op() {
        let mut form: ImageForm<&str> = ImageForm::default();
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), None);
        assert!(!form.panel.is_busy());
    }

    #[test]
    fn submit_with_file_marks_busy_once() {
        let mut form = ImageForm::default();
        form.select("sky.jpg");
        assert_eq!(form.begin_submit(), Some("sky.jpg"));
        assert!(form.panel.is_busy());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn selecting_a_new_file_clears_previous_outcome() {
        let mut form = ImageForm::default();
        form.select("a.png");
        form.begin_submit();
        form.panel.resolve(Ok(image_prediction("Cloudy")));
        assert!(shown_prediction(&form.panel).is_some());

        form.select("b.png");
        assert_eq!(form.selected(), Some(&"b.png"));
        assert!(form.panel.outcome().is_none());

        form.begin_submit();
        form.panel.resolve(Err(ApiError::Network("down".into())));
        form.select("c.png");
        assert!(shown_error(&form.panel).is_none());
    }

    #[test]
    fn success_clears_error_and_failure_clears_prediction() {
        let mut panel = PredictionPanel::default();

        assert!(panel.begin());
        panel.resolve(Err(ApiError::from_status(400, r#"{"error":"Image invalide ou manquante"}"#)));
        assert_eq!(shown_error(&panel), Some("Image invalide ou manquante"));
        assert!(shown_prediction(&panel).is_none());
        assert!(!panel.is_busy());

        assert!(panel.begin());
        panel.resolve(Ok(image_prediction("Foggy")));
        assert_eq!(shown_prediction(&panel).map(|p| p.prediction.as_str()), Some("Foggy"));
        assert!(shown_error(&panel).is_none());

        assert!(panel.begin());
        panel.resolve(Err(ApiError::from_status(500, "")));
        assert_eq!(shown_error(&panel), Some(GENERIC_ERROR_MESSAGE));
        assert!(shown_prediction(&panel).is_none());
    }

    #[test]
    fn previous_outcome_stays_visible_while_busy() {
        let mut panel = PredictionPanel::default();
        panel.begin();
        panel.resolve(Ok(tabular_prediction("Rainy")));
        assert!(panel.begin());
        assert!(panel.is_busy());
        assert!(shown_prediction(&panel).is_some());
    }

    #[test]
    fn tabular_submit_is_always_allowed_when_idle() {
        let mut form = TabularForm::default();
        let sent = form.begin_submit().expect("idle form submits");
        assert_eq!(sent, WeatherObservation::default());
        assert!(form.begin_submit().is_none());

        form.panel.resolve(Ok(tabular_prediction("Sunny")));
        form.update_field(TabularField::Temperature, "3").unwrap();
        let sent = form.begin_submit().expect("idle again");
        assert_eq!(sent.temperature, 3.0);
    }

    #[test]
    fn edits_during_flight_do_not_touch_the_snapshot() {
        let mut form = TabularForm::default();
        let sent = form.begin_submit().unwrap();
        form.update_field(TabularField::Humidity, "1").unwrap();
        assert_eq!(sent.humidity, 70.0);
        assert_eq!(form.record().humidity, 1.0);
    }

    #[test]
    fn selection_is_ignored_while_a_request_is_in_flight() {
        let mut form = ImageForm::default();
        form.select("storm.jpg");
        form.begin_submit();
        assert!(!form.select("sunrise.jpg"));
        assert_eq!(form.selected(), Some(&"storm.jpg"));

        form.panel.resolve(Ok(image_prediction("Lightning")));
        assert!(form.select("sunrise.jpg"));
        assert_eq!(form.selected(), Some(&"sunrise.jpg"));
        assert!(form.panel.outcome().is_none());
    }

    #[test]
    fn inputs_display_exactly_what_was_typed() {
        let mut form = TabularForm::default();
        assert_eq!(form.draft(TabularField::Temperature), "25");
        assert_eq!(form.draft(TabularField::SolarRadiation), "1");

        for typed in ["1", "1.", "1.0", "1.05"] {
            form.update_field(TabularField::Temperature, typed).unwrap();
            assert_eq!(form.draft(TabularField::Temperature), typed);
        }
        assert_eq!(form.record().temperature, 1.05);
        assert_eq!(form.begin_submit().map(|r| r.temperature), Some(1.05));
    }

    #[test]
    fn cleared_field_blocks_submit_instead_of_sending_stale_value() {
        let mut form = TabularForm::default();
        assert!(form.update_field(TabularField::Pressure, "").is_err());
        assert_eq!(form.draft(TabularField::Pressure), "");
        assert!(form.is_invalid(TabularField::Pressure));
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), None);
        assert!(!form.panel.is_busy());

        form.update_field(TabularField::Pressure, "998.5").unwrap();
        assert!(!form.is_invalid(TabularField::Pressure));
        assert_eq!(form.begin_submit().map(|r| r.pressure), Some(998.5));
    }

    #[test]
    fn fields_are_edited_by_wire_name() {
        let mut form = TabularForm::default();
        form.update_named("uv_index", "7.5").unwrap();
        form.update_named("solar_radiation", "0").unwrap();
        assert_eq!(form.record().uv_index, 7.5);
        assert_eq!(form.record().solar_radiation, crate::tabular::SolarRadiation::Low);
        assert_eq!(
            form.update_named("wind_chill", "1"),
            Err(FieldError::UnknownField("wind_chill".into()))
        );
    }
}
