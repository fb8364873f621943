use log::{debug, info};
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

/// A countdown length in minutes, as entered in the duration field.
///
/// Fractional and negative values are carried as-is; only the conversion to
/// seconds clamps them.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Minutes(pub f64);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0.0);

    /// Whole seconds in this duration: `floor(minutes * 60)`, never negative.
    pub fn to_seconds(self) -> u32 {
        let secs = (self.0 * 60.0).floor();
        if !secs.is_finite() || secs <= 0.0 {
            0
        } else if secs >= u32::MAX as f64 {
            u32::MAX
        } else {
            secs as u32
        }
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format a second count as `M:SS` (minutes unpadded and uncapped).
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Duration field parsing errors
#[derive(Debug, Clone, PartialEq)]
pub enum DurationParseError {
    NotANumber(String),
    NotFinite(String),
}

impl fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationParseError::NotANumber(text) => {
                write!(f, "Duration must be a number of minutes, got {:?}", text)
            }
            DurationParseError::NotFinite(text) => {
                write!(f, "Duration must be finite, got {:?}", text)
            }
        }
    }
}

impl std::error::Error for DurationParseError {}

/// Parse the duration field's text into minutes.
///
/// An empty field reads as zero, the way a cleared numeric input does.
/// Negative values are accepted; [`Minutes::to_seconds`] clamps them.
///
/// # Examples
/// ```
/// use countdown_pair::{parse_minutes, Minutes};
/// assert_eq!(parse_minutes("2.5"), Ok(Minutes(2.5)));
/// assert_eq!(parse_minutes(""), Ok(Minutes::ZERO));
/// ```
pub fn parse_minutes(input: &str) -> Result<Minutes, DurationParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Minutes::ZERO);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| DurationParseError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(DurationParseError::NotFinite(trimmed.to_string()));
    }
    Ok(Minutes(value))
}

/// A command for the alarm owned by a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmCommand {
    Play,
    StopAndRewind,
}

/// Audio playback seam for a countdown's alarm.
///
/// Playback failures belong to the implementation; callers fire and forget.
pub trait Alarm {
    fn play(&self);
    fn stop_and_rewind(&self);

    fn execute(&self, command: AlarmCommand) {
        match command {
            AlarmCommand::Play => self.play(),
            AlarmCommand::StopAndRewind => self.stop_and_rewind(),
        }
    }
}

/// The most recent alarm command, numbered so each one is executed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmSignal {
    pub seq: u32,
    pub command: AlarmCommand,
}

/// Input events for a [`Countdown`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerEvent {
    DurationChanged(Minutes),
    Start,
    Tick,
    Pause,
    Reset,
}

/// Countdown state machine for one timer.
///
/// Idle and Running are distinguished by `is_running`; expiry collapses
/// straight back to Idle with zero seconds left after signalling the alarm.
/// Invariant: `remaining_seconds == 0` implies `!is_running`.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    remaining_seconds: u32,
    is_running: bool,
    /// Last duration received through `DurationChanged` (or construction).
    duration: Minutes,
    /// Identity of the current tick schedule; bumped on every Start.
    run: u32,
    alarm: Option<AlarmSignal>,
}

impl Countdown {
    pub fn new(duration: Minutes) -> Self {
        Self {
            remaining_seconds: duration.to_seconds(),
            is_running: false,
            duration,
            run: 0,
            alarm: None,
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn duration(&self) -> Minutes {
        self.duration
    }

    /// Display string for the remaining time.
    pub fn display(&self) -> String {
        format_time(self.remaining_seconds)
    }

    /// The tick schedule that should be active, if any.
    ///
    /// A new Start yields a different value even if the timer was already
    /// running, so a host keyed on this value replaces its schedule.
    pub fn schedule(&self) -> Option<u32> {
        self.is_running.then_some(self.run)
    }

    pub fn alarm_signal(&self) -> Option<AlarmSignal> {
        self.alarm
    }

    /// Apply one event and return the alarm command it issues, if any.
    pub fn apply(&mut self, event: TimerEvent) -> Option<AlarmCommand> {
        let command = match event {
            TimerEvent::DurationChanged(duration) => {
                self.duration = duration;
                self.remaining_seconds = duration.to_seconds();
                debug!("duration changed to {} min", duration);
                if self.is_running && self.remaining_seconds == 0 {
                    self.expire()
                } else {
                    None
                }
            }
            TimerEvent::Start => {
                self.remaining_seconds = self.duration.to_seconds();
                self.is_running = true;
                self.run = self.run.wrapping_add(1);
                info!("countdown started at {}", self.display());
                if self.remaining_seconds == 0 {
                    self.expire()
                } else {
                    None
                }
            }
            TimerEvent::Tick => {
                if !self.is_running {
                    None
                } else if self.remaining_seconds <= 1 {
                    self.expire()
                } else {
                    self.remaining_seconds -= 1;
                    debug!("tick: {} left", self.display());
                    None
                }
            }
            TimerEvent::Pause => {
                if self.is_running {
                    self.is_running = false;
                    info!("countdown paused at {}", self.display());
                }
                None
            }
            TimerEvent::Reset => {
                self.is_running = false;
                self.remaining_seconds = self.duration.to_seconds();
                info!("countdown reset to {}", self.display());
                Some(AlarmCommand::StopAndRewind)
            }
        };

        if let Some(command) = command {
            let seq = self.alarm.map_or(0, |s| s.seq).wrapping_add(1);
            self.alarm = Some(AlarmSignal { seq, command });
        }
        command
    }

    fn expire(&mut self) -> Option<AlarmCommand> {
        self.remaining_seconds = 0;
        self.is_running = false;
        info!("countdown expired");
        Some(AlarmCommand::Play)
    }
}

impl Reducible for Countdown {
    type Action = TimerEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub mod alarm;
pub mod presets;
