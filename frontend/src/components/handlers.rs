use super::image_classification::{ImageClassification, ImageMsg};
use super::tabular_classification::{TabularClassification, TabularMsg};
use crate::api;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ApiError, ImagePrediction, TabularPrediction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_image_selected(model: &mut ImageClassification, file: GlooFile) -> bool {
    if !model.form.select(file.clone()) {
        log::debug!("Ignoring {} while a prediction is in flight", file.name());
        return false;
    }
    log::debug!("Selected image {} ({} bytes)", file.name(), file.size());
    // Dropping the previous ObjectUrl revokes it.
    model.preview_url = Some(ObjectUrl::from(file));
    true
}

pub fn handle_image_submit(model: &mut ImageClassification, ctx: &Context<ImageClassification>) -> bool {
    let Some(file) = model.form.begin_submit() else {
        return false;
    };

    let link = ctx.link().clone();
    let config = ctx.props().config.clone();
    spawn_local(async move {
        let result = api::predict_image(&config, &file).await;
        link.send_message(ImageMsg::Resolved(result));
    });

    true
}

pub fn handle_image_resolved(
    model: &mut ImageClassification,
    result: Result<ImagePrediction, ApiError>,
) -> bool {
    match &result {
        Ok(prediction) => log::info!(
            "Image classified as {} ({})",
            prediction.prediction,
            prediction.confidence_label()
        ),
        Err(e) => log::warn!("Image prediction failed: {}", e),
    }
    model.form.panel.resolve(result);
    true
}

pub fn handle_field_edited(model: &mut TabularClassification, name: String, raw: String) -> bool {
    if let Err(e) = model.form.update_named(&name, &raw) {
        log::debug!("Field left invalid: {}", e);
    }
    // The draft changed either way; re-render to keep it and the invalid mark.
    true
}

pub fn handle_tabular_submit(
    model: &mut TabularClassification,
    ctx: &Context<TabularClassification>,
) -> bool {
    let Some(record) = model.form.begin_submit() else {
        return false;
    };

    let link = ctx.link().clone();
    let config = ctx.props().config.clone();
    spawn_local(async move {
        let result = api::predict_tabular(&config, &record).await;
        link.send_message(TabularMsg::Resolved(result));
    });

    true
}

pub fn handle_tabular_resolved(
    model: &mut TabularClassification,
    result: Result<TabularPrediction, ApiError>,
) -> bool {
    match &result {
        Ok(prediction) => log::info!("Observation classified as {}", prediction.prediction),
        Err(e) => log::warn!("Tabular prediction failed: {}", e),
    }
    model.form.panel.resolve(result);
    true
}
