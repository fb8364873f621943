//! Two-timer page built with Yew.
//! The container owns each timer's duration; everything else lives in the timers.

use countdown_pair::presets::load_presets;
use countdown_pair::Minutes;
use log::info;
use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::CountdownTimer;
use config::LOG_LEVEL;

/// Host container: two independent timers, each bound to its own duration.
#[function_component]
pub fn App() -> Html {
    let presets = use_memo((), |_| load_presets());
    let [first, second] = &presets.timers;

    let first_minutes = use_state(|| first.minutes);
    let second_minutes = use_state(|| second.minutes);

    let on_first_change = {
        let first_minutes = first_minutes.clone();
        Callback::from(move |minutes: Minutes| first_minutes.set(minutes))
    };
    let on_second_change = {
        let second_minutes = second_minutes.clone();
        Callback::from(move |minutes: Minutes| second_minutes.set(minutes))
    };

    html! {
        <div class="app">
            <CountdownTimer
                label={first.label.clone()}
                duration={*first_minutes}
                on_duration_change={on_first_change}
                alarm_url={first.alarm_url.clone()}
            />
            <CountdownTimer
                label={second.label.clone()}
                duration={*second_minutes}
                on_duration_change={on_second_change}
                alarm_url={second.alarm_url.clone()}
            />
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    info!("Starting countdown timers");
    yew::Renderer::<App>::new().render();
}
