mod api;
mod components;
mod config;

use components::connection_check::ConnectionCheck;
use components::header::render_header;
use components::tabs::{render_module, render_tabs};
use shared::{ApiConfig, Tab};
use yew::prelude::*;

pub enum Msg {
    SelectTab(Tab),
}

// Shell: owns nothing but the active tab
pub struct App {
    active: Tab,
    config: ApiConfig,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active: Tab::default(),
            config: config::load(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectTab(tab) if tab != self.active => {
                log::debug!("Switching to {} tab", tab);
                self.active = tab;
                true
            }
            Msg::SelectTab(_) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="App">
                { render_header() }
                { render_tabs(self.active, ctx.link().callback(Msg::SelectTab)) }

                <main>
                    { render_module(self.active, self.config.clone()) }
                </main>

                <footer class="app-footer">
                    <ConnectionCheck config={self.config.clone()} />
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
