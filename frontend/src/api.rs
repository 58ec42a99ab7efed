use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::{ApiConfig, ApiError, Endpoint, ImagePrediction, TabularPrediction, WeatherObservation};
use wasm_bindgen::JsValue;
use web_sys::FormData;

fn js_error(err: JsValue) -> ApiError {
    ApiError::Request(format!("{:?}", err))
}

pub async fn predict_image(config: &ApiConfig, file: &GlooFile) -> Result<ImagePrediction, ApiError> {
    let form_data = FormData::new().map_err(js_error)?;
    form_data
        .append_with_blob_and_filename("image", file.as_ref(), &file.name())
        .map_err(js_error)?;

    let request = Request::post(&config.url(Endpoint::ImagePredict))
        .body(form_data)
        .map_err(|e| ApiError::Request(e.to_string()))?;

    send(request).await
}

pub async fn predict_tabular(
    config: &ApiConfig,
    record: &WeatherObservation,
) -> Result<TabularPrediction, ApiError> {
    let request = Request::post(&config.url(Endpoint::TabularPredict))
        .json(record)
        .map_err(|e| ApiError::Request(e.to_string()))?;

    send(request).await
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pings the API root and dumps what comes back to the developer console.
pub async fn check_connection(config: ApiConfig) {
    let url = config.url(Endpoint::Overview);
    gloo_console::log!("Checking API connection:", &url);

    match Request::get(&url).send().await {
        Ok(resp) => {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let pretty = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| serde_json::to_string_pretty(&v).ok())
                .unwrap_or(body);
            if resp.ok() {
                gloo_console::log!("Response:", status, pretty);
            } else {
                error!("Status:", status);
                error!("Data:", pretty);
            }
        }
        Err(e) => {
            error!(format!("Connection check failed: {:?}", e));
        }
    }
}
