use shared::ApiConfig;
use web_sys::UrlSearchParams;

/// Query parameter that overrides the API base for this page load.
const API_QUERY_PARAM: &str = "api";

/// Resolves the API base: `?api=` on the page URL, then `WEATHER_API_BASE`
/// at build time, then the built-in default.
pub fn load() -> ApiConfig {
    let from_query = query_param(API_QUERY_PARAM);
    let config = ApiConfig::resolve([from_query.as_deref(), option_env!("WEATHER_API_BASE")]);
    log::info!("Using prediction API at {}", config.base());
    config
}

fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}
