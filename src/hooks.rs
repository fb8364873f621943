use crate::config::TICK_INTERVAL_MS;
use countdown_pair::alarm::AudioAlarm;
use countdown_pair::{parse_minutes, Alarm, Countdown, Minutes, TimerEvent};
use gloo_timers::callback::Interval;
use log::{debug, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Current countdown state plus the command callbacks for its buttons.
#[derive(Clone)]
pub struct CountdownHandle {
    pub remaining_seconds: u32,
    pub is_running: bool,
    pub on_start: Callback<()>,
    pub on_pause: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Run one countdown for the given duration, ringing `alarm_url` on expiry.
///
/// The tick `Interval` lives inside an effect keyed on the countdown's
/// schedule, so dropping it (on pause, reset, expiry, restart or unmount)
/// is what cancels ticking.
#[hook]
pub fn use_countdown(duration: Minutes, alarm_url: AttrValue) -> CountdownHandle {
    let state = use_reducer(|| Countdown::new(duration));
    let alarm = use_memo(alarm_url, |url| AudioAlarm::new(url));

    // Every new duration from the container is an input event
    {
        let dispatcher = state.dispatcher();
        use_effect_with(duration, move |duration| {
            dispatcher.dispatch(TimerEvent::DurationChanged(*duration));
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.schedule(), move |schedule| {
            let interval = schedule.map(|run| {
                debug!("Installing tick schedule {}", run);
                Interval::new(TICK_INTERVAL_MS, move || {
                    dispatcher.dispatch(TimerEvent::Tick);
                })
            });
            move || {
                if interval.is_some() {
                    debug!("Cancelling tick schedule");
                }
                drop(interval);
            }
        });
    }

    {
        let alarm = alarm.clone();
        use_effect_with(state.alarm_signal(), move |signal| {
            if let Some(signal) = signal {
                debug!("Alarm command #{}: {:?} ({})", signal.seq, signal.command, alarm.url());
                alarm.execute(signal.command);
            }
        });
    }

    let on_start = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TimerEvent::Start))
    };
    let on_pause = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TimerEvent::Pause))
    };
    let on_reset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TimerEvent::Reset))
    };

    CountdownHandle {
        remaining_seconds: state.remaining_seconds(),
        is_running: state.is_running(),
        on_start,
        on_pause,
        on_reset,
    }
}

/// Text state and input handler for a duration field.
#[derive(Clone)]
pub struct DurationInput {
    /// The field's text as typed.
    pub text: String,
    pub on_input: Callback<InputEvent>,
}

/// Keep a duration field's text and forward each parsed edit to `on_change`.
///
/// Text is kept as typed so partial entries are not rewritten; it is only
/// replaced when `duration` changes to something the text does not parse to.
#[hook]
pub fn use_duration_input(duration: Minutes, on_change: Callback<Minutes>) -> DurationInput {
    let text = use_state(|| duration.to_string());

    let on_input = {
        let text_setter = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            match parse_minutes(&value) {
                Ok(minutes) => on_change.emit(minutes),
                Err(err) => warn!("Ignoring duration edit: {}", err),
            }
            text_setter.set(value);
        })
    };

    {
        let text = text.clone();
        use_effect_with(duration, move |duration| {
            if parse_minutes(&text) != Ok(*duration) {
                text.set(duration.to_string());
            }
        });
    }

    DurationInput {
        text: (*text).clone(),
        on_input,
    }
}
