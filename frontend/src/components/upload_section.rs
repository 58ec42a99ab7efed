use super::image_classification::{ImageClassification, ImageMsg};
use gloo_file::File as GlooFile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(ctx: &Context<ImageClassification>, disabled: bool) -> Html {
    // The accept attribute is a picker hint; whatever comes back is used as is.
    let handle_change = ctx.link().batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.item(0))
            .map(|file| ImageMsg::FileSelected(GlooFile::from(file)))
    });

    html! {
        <div class="form-group">
            <label for="image-upload">{"Choose an image:"}</label>
            <input
                type="file"
                id="image-upload"
                accept="image/*"
                {disabled}
                onchange={handle_change}
            />
        </div>
    }
}
