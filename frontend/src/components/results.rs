use super::utils::render_error_message;
use shared::{Advice, ImagePrediction, Outcome, TabularPrediction};
use yew::prelude::*;

/// Either the last prediction or the last error, never both.
pub fn render_outcome<T>(outcome: Option<&Outcome<T>>, render: fn(&T) -> Html) -> Html {
    match outcome {
        Some(Outcome::Prediction(prediction)) => render(prediction),
        Some(Outcome::Error(message)) => render_error_message(message),
        None => html! {},
    }
}

pub fn render_image_result(result: &ImagePrediction) -> Html {
    html! {
        <div class="result">
            <h3>{"Result:"}</h3>
            <p><strong>{"Prediction: "}</strong>{ &result.prediction }</p>
            <p><strong>{"Confidence: "}</strong>{ result.confidence_label() }</p>
            { render_advice(&result.advice) }
            { render_class_scores(result) }
        </div>
    }
}

pub fn render_tabular_result(result: &TabularPrediction) -> Html {
    html! {
        <div class="result">
            <h3>{"Result:"}</h3>
            <p><strong>{"Prediction: "}</strong>{ &result.prediction }</p>
            { render_advice(&result.advice) }
            { render_features_used(&result.features_used) }
        </div>
    }
}

/// Lists advice as "category: text" in the order the server sent it.
fn render_advice(advice: &Advice) -> Html {
    if advice.is_empty() {
        return html! {};
    }

    html! {
        <div class="advice">
            <strong>{"Advice:"}</strong>
            <ul>
                { for advice.iter().map(|(category, text)| html! {
                    <li key={category.to_string()}>
                        <strong>{ format!("{}: ", category) }</strong>{ text }
                    </li>
                })}
            </ul>
        </div>
    }
}

fn render_features_used(features: &[String]) -> Html {
    if features.is_empty() {
        return html! {};
    }

    html! {
        <p class="features-used">
            <strong>{"Features used: "}</strong>{ features.join(", ") }
        </p>
    }
}

fn render_class_scores(result: &ImagePrediction) -> Html {
    let scores = result.ranked_scores();
    if scores.is_empty() {
        return html! {};
    }

    html! {
        <div class="detailed-results">
            <h4>{"All classes"}</h4>
            <div class="result-bars">
                { for scores.into_iter().map(|(class_name, score)| {
                    let percentage = score * 100.0;
                    html! {
                        <div class="result-item" key={class_name.to_string()}>
                            <div class="result-label">{ class_name }</div>
                            <div class="result-bar-container">
                                <div class="result-bar" style={format!("width: {:.2}%", percentage)}></div>
                            </div>
                            <div class="result-value">{ shared::format_confidence(score) }</div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
