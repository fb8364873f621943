//! Timer presets for the two-timer page.
//!
//! Presets are read from `timers.json`, embedded at build time. The file must
//! list exactly two timers; anything else is a parse error and the built-in
//! presets are used instead.

use crate::Minutes;
use log::warn;
use serde::{Deserialize, Serialize};

/// Embedded preset file.
pub const PRESETS_JSON: &str = include_str!("../timers.json");

/// One timer card: its label, starting duration and alarm sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerPreset {
    pub label: String,
    pub minutes: Minutes,
    pub alarm_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presets {
    pub timers: [TimerPreset; 2],
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            timers: [
                TimerPreset {
                    label: "Timer".to_string(),
                    minutes: Minutes(6.0),
                    alarm_url: "https://actions.google.com/sounds/v1/alarms/alarm_clock.ogg"
                        .to_string(),
                },
                TimerPreset {
                    label: "Deadline".to_string(),
                    minutes: Minutes(30.0),
                    alarm_url: "https://actions.google.com/sounds/v1/alarms/spaceship_alarm.ogg"
                        .to_string(),
                },
            ],
        }
    }
}

pub fn parse_presets(json: &str) -> Result<Presets, serde_json::Error> {
    serde_json::from_str(json)
}

/// Presets from the embedded file, falling back to the built-in pair.
pub fn load_presets() -> Presets {
    parse_presets(PRESETS_JSON).unwrap_or_else(|err| {
        warn!("Invalid timer presets, using defaults: {}", err);
        Presets::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_presets_match_builtin() {
        assert_eq!(parse_presets(PRESETS_JSON).unwrap(), Presets::default());
    }

    #[test]
    fn rejects_wrong_timer_count() {
        let one = r#"{"timers":[{"label":"Solo","minutes":1,"alarm_url":"a.ogg"}]}"#;
        assert!(parse_presets(one).is_err());
    }

    #[test]
    fn accepts_fractional_minutes() {
        let json = r#"{"timers":[
            {"label":"Tea","minutes":3.5,"alarm_url":"tea.ogg"},
            {"label":"Egg","minutes":0.1,"alarm_url":"egg.ogg"}
        ]}"#;
        let presets = parse_presets(json).unwrap();
        assert_eq!(presets.timers[0].minutes.to_seconds(), 210);
        assert_eq!(presets.timers[1].label, "Egg");
    }

    #[test]
    fn malformed_file_falls_back() {
        assert!(parse_presets("{ not json").is_err());
        assert_eq!(load_presets(), Presets::default());
    }
}
