use super::image_classification::ImageClassification;
use yew::prelude::*;

pub fn render_preview_area(model: &ImageClassification) -> Html {
    match (&model.preview_url, model.form.selected()) {
        (Some(url), Some(file)) => html! {
            <div class="image-preview">
                <img src={url.to_string()} alt="Preview" />
                <p class="file-name">{ file.name() }</p>
            </div>
        },
        _ => html! {},
    }
}
