use super::handlers::{handle_image_resolved, handle_image_selected, handle_image_submit};
use super::preview_area::render_preview_area;
use super::results::{render_image_result, render_outcome};
use super::upload_section::render_upload_section;
use super::utils::render_submit_button;
use super::ModuleProps;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ApiError, ImageForm, ImagePrediction};
use yew::prelude::*;

pub enum ImageMsg {
    FileSelected(GlooFile),
    Submit,
    Resolved(Result<ImagePrediction, ApiError>),
}

pub struct ImageClassification {
    pub form: ImageForm<GlooFile>,
    pub preview_url: Option<ObjectUrl>,
}

impl Component for ImageClassification {
    type Message = ImageMsg;
    type Properties = ModuleProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ImageForm::default(),
            preview_url: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ImageMsg::FileSelected(file) => handle_image_selected(self, file),
            ImageMsg::Submit => handle_image_submit(self, ctx),
            ImageMsg::Resolved(result) => handle_image_resolved(self, result),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ImageMsg::Submit
        });
        let busy = self.form.panel.is_busy();

        html! {
            <div class="classification-container">
                <h2>{"Weather Image Classification"}</h2>
                <form {onsubmit}>
                    { render_upload_section(ctx, busy) }
                    { render_preview_area(self) }
                    { render_submit_button(!self.form.can_submit(), busy) }
                </form>
                { render_outcome(self.form.panel.outcome(), render_image_result) }
            </div>
        }
    }
}
