//! Yew view components for the countdown timers.

use crate::config::{DURATION_MIN, DURATION_STEP};
use crate::hooks::{use_countdown, use_duration_input};
use countdown_pair::{format_time, Minutes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeDisplayProps {
    pub seconds: u32,
}

/// Large `M:SS` readout of the remaining time.
#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {
        <h1 class="timer-display" role="timer" aria-live="polite">
            { format_time(props.seconds) }
        </h1>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    pub label: AttrValue,
    /// Owned by the container; edits come back through `on_duration_change`.
    pub duration: Minutes,
    pub on_duration_change: Callback<Minutes>,
    pub alarm_url: AttrValue,
}

/// One timer card: duration field, Start, the readout, Pause and Reset.
#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let countdown = use_countdown(props.duration, props.alarm_url.clone());
    let input = use_duration_input(props.duration, props.on_duration_change.clone());

    let onsubmit = {
        let on_start = countdown.on_start.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_start.emit(());
        })
    };

    html! {
        <div class="timer-container">
            <h2 class="timer-label">{ props.label.clone() }</h2>
            <form class="timer-form" {onsubmit}>
                <input
                    type="number"
                    class="timer-input"
                    step={DURATION_STEP.to_string()}
                    min={DURATION_MIN.to_string()}
                    value={input.text}
                    oninput={input.on_input}
                    aria-label={format!("{} time input in minutes", props.label)}
                />
                <button type="submit" class="btn btn-start">{ "Start" }</button>
            </form>

            <TimeDisplay seconds={countdown.remaining_seconds} />

            <div class="button-group">
                <button
                    class={classes!("btn", (!countdown.is_running).then_some("btn-disabled"))}
                    disabled={!countdown.is_running}
                    onclick={countdown.on_pause.reform(|_| ())}
                >
                    { "Pause" }
                </button>
                <button class="btn" onclick={countdown.on_reset.reform(|_| ())}>
                    { "Reset" }
                </button>
            </div>
        </div>
    }
}
