use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

pub fn render_submit_button(disabled: bool, busy: bool) -> Html {
    html! {
        <button type="submit" {disabled}>
            { if busy { "Processing..." } else { "Predict" } }
        </button>
    }
}

pub fn render_error_message(message: &str) -> Html {
    html! {
        <div class="error">
            <p>{ message }</p>
        </div>
    }
}
