//! Browser audio alarm backed by an `HtmlAudioElement`.

use crate::Alarm;
use log::{debug, warn};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// One audio element per countdown, created once and released on drop.
///
/// If the element cannot be created the alarm stays silent.
pub struct AudioAlarm {
    url: String,
    element: Option<HtmlAudioElement>,
}

impl AudioAlarm {
    pub fn new(url: &str) -> Self {
        let element = match HtmlAudioElement::new_with_src(url) {
            Ok(element) => Some(element),
            Err(err) => {
                warn!("Failed to create alarm audio for {}: {:?}", url, err);
                None
            }
        };
        Self {
            url: url.to_string(),
            element,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Alarm for AudioAlarm {
    fn play(&self) {
        let Some(element) = &self.element else {
            return;
        };
        debug!("Playing alarm {}", self.url);
        match element.play() {
            Ok(promise) => {
                let url = self.url.clone();
                // playback may be blocked by autoplay policy; that only gets logged
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        warn!("Alarm playback for {} rejected: {:?}", url, err);
                    }
                });
            }
            Err(err) => warn!("Alarm playback for {} failed: {:?}", self.url, err),
        }
    }

    fn stop_and_rewind(&self) {
        let Some(element) = &self.element else {
            return;
        };
        if let Err(err) = element.pause() {
            warn!("Failed to pause alarm {}: {:?}", self.url, err);
        }
        element.set_current_time(0.0);
    }
}

impl Drop for AudioAlarm {
    fn drop(&mut self) {
        if let Some(element) = self.element.take() {
            let _ = element.pause();
            element.set_src("");
            debug!("Released alarm {}", self.url);
        }
    }
}
