use super::image_classification::ImageClassification;
use super::tabular_classification::TabularClassification;
use shared::{ApiConfig, Tab};
use strum::IntoEnumIterator;
use yew::prelude::*;

pub fn render_tabs(active: Tab, onselect: Callback<Tab>) -> Html {
    html! {
        <div class="tabs">
            { for Tab::iter().map(|tab| html! {
                <button
                    key={tab.to_string()}
                    class={classes!((tab == active).then_some("active"))}
                    onclick={onselect.reform(move |_| tab)}
                >
                    { tab.title() }
                </button>
            })}
        </div>
    }
}

/// The one module shown for `active`. The other is not mounted at all.
pub fn render_module(active: Tab, config: ApiConfig) -> Html {
    match active {
        Tab::Image => html! { <ImageClassification {config} /> },
        Tab::Tabular => html! { <TabularClassification {config} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    const IMAGE_HEADING: &str = "Weather Image Classification";
    const TABULAR_HEADING: &str = "Tabular Data Classification";

    #[function_component]
    fn ImageShell() -> Html {
        html! {
            <>
                { render_tabs(Tab::Image, Callback::noop()) }
                { render_module(Tab::Image, ApiConfig::default()) }
            </>
        }
    }

    #[function_component]
    fn TabularShell() -> Html {
        html! {
            <>
                { render_tabs(Tab::Tabular, Callback::noop()) }
                { render_module(Tab::Tabular, ApiConfig::default()) }
            </>
        }
    }

    #[tokio::test]
    async fn exactly_one_module_is_rendered_per_tab() {
        let html = ServerRenderer::<ImageShell>::new().hydratable(false).render().await;
        assert!(html.contains(IMAGE_HEADING), "{html}");
        assert!(!html.contains(TABULAR_HEADING), "{html}");

        let html = ServerRenderer::<TabularShell>::new().hydratable(false).render().await;
        assert!(html.contains(TABULAR_HEADING), "{html}");
        assert!(!html.contains(IMAGE_HEADING), "{html}");
    }

    #[tokio::test]
    async fn only_the_active_tab_is_highlighted() {
        let html = ServerRenderer::<TabularShell>::new().hydratable(false).render().await;
        assert_eq!(html.matches(r#"class="active""#).count(), 1, "{html}");
        assert!(html.contains(r#"class="active">Tabular Data<"#), "{html}");
    }

    #[tokio::test]
    async fn tabular_inputs_start_from_the_default_record() {
        let html = ServerRenderer::<TabularShell>::new().hydratable(false).render().await;
        assert!(html.contains(r#"value="1013""#), "{html}");
        assert!(!html.contains("invalid"), "{html}");
    }
}
