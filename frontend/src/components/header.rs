use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="App-header">
            <h1>{"Smart Weather Analysis"}</h1>
        </header>
    }
}
