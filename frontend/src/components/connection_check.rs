use super::utils::debounce;
use crate::api;
use shared::ApiConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConnectionCheckProps {
    pub config: ApiConfig,
}

/// Developer helper: results only go to the browser console.
#[function_component(ConnectionCheck)]
pub fn connection_check(props: &ConnectionCheckProps) -> Html {
    let config = props.config.clone();
    let onclick = debounce(300, move || spawn_local(api::check_connection(config.clone())));

    html! {
        <div class="connection-check">
            <button {onclick}>{"Test API connection"}</button>
        </div>
    }
}
