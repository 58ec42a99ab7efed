use super::handlers::{handle_field_edited, handle_tabular_resolved, handle_tabular_submit};
use super::results::{render_outcome, render_tabular_result};
use super::utils::render_submit_button;
use super::ModuleProps;
use shared::{ApiError, SolarRadiation, TabularField, TabularForm, TabularPrediction};
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub enum TabularMsg {
    FieldEdited(String, String),
    Submit,
    Resolved(Result<TabularPrediction, ApiError>),
}

pub struct TabularClassification {
    pub form: TabularForm,
}

impl Component for TabularClassification {
    type Message = TabularMsg;
    type Properties = ModuleProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: TabularForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TabularMsg::FieldEdited(name, raw) => handle_field_edited(self, name, raw),
            TabularMsg::Submit => handle_tabular_submit(self, ctx),
            TabularMsg::Resolved(result) => handle_tabular_resolved(self, result),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            TabularMsg::Submit
        });
        let busy = self.form.panel.is_busy();
        let disabled = !self.form.can_submit();

        html! {
            <div class="classification-container">
                <h2>{"Tabular Data Classification"}</h2>
                <form {onsubmit}>
                    { for TabularField::iter().map(|field| self.render_field(ctx, field)) }
                    { render_submit_button(disabled, busy) }
                </form>
                { render_outcome(self.form.panel.outcome(), render_tabular_result) }
            </div>
        }
    }
}

impl TabularClassification {
    fn render_field(&self, ctx: &Context<Self>, field: TabularField) -> Html {
        let spec = field.spec();
        let id = format!("field-{}", field.as_ref());
        let name = field.as_ref().to_string();
        let class = classes!(self.form.is_invalid(field).then_some("invalid"));

        let control = if field.is_categorical() {
            let onchange = ctx.link().callback(|e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                TabularMsg::FieldEdited(select.name(), select.value())
            });
            let current = self.form.record().solar_radiation;
            html! {
                <select id={id.clone()} {name} {class} {onchange}>
                    { for SolarRadiation::iter().map(|level| html! {
                        <option value={level.code().to_string()} selected={level == current}>
                            { level.to_string() }
                        </option>
                    })}
                </select>
            }
        } else {
            let oninput = ctx.link().callback(|e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                TabularMsg::FieldEdited(input.name(), input.value())
            });
            html! {
                <input
                    type="number"
                    id={id.clone()}
                    {name}
                    {class}
                    value={self.form.draft(field).to_string()}
                    min={spec.min.to_string()}
                    max={spec.max.to_string()}
                    step={spec.step.to_string()}
                    {oninput}
                />
            }
        };

        html! {
            <div class="form-group" key={field.as_ref().to_string()}>
                <label for={id}>{ format!("{}:", spec.label) }</label>
                { control }
            </div>
        }
    }
}
