pub mod connection_check;
pub mod handlers;
pub mod header;
pub mod image_classification;
pub mod preview_area;
pub mod results;
pub mod tabs;
pub mod tabular_classification;
pub mod upload_section;
pub mod utils;

use shared::ApiConfig;
use yew::prelude::*;

/// Props shared by both classification modules.
#[derive(Properties, PartialEq, Clone)]
pub struct ModuleProps {
    pub config: ApiConfig,
}
