//! Visitor announcer.
//!
//! Thin availability latch over the [`SpeechPort`]: the engine is configured
//! once at startup (locale + pitch), and a configure failure permanently
//! disables announcements — subsequent `speak` calls become no-ops rather
//! than errors, so a broken speech stack can never take the orchestrator
//! down with it.

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, SpeechPort};

pub struct Announcer {
    locale: String,
    pitch: f32,
    available: bool,
}

impl Announcer {
    pub fn new(locale: &str, pitch: f32) -> Self {
        Self {
            locale: locale.to_owned(),
            pitch,
            available: false,
        }
    }

    /// Configure the engine. Called once during startup; failure leaves the
    /// announcer permanently unavailable.
    pub fn init(&mut self, engine: &mut impl SpeechPort, sink: &mut impl EventSink) {
        match engine.configure(&self.locale, self.pitch) {
            Ok(()) => {
                self.available = true;
                log::info!("Speech engine ready ({}, pitch {})", self.locale, self.pitch);
            }
            Err(e) => {
                self.available = false;
                log::warn!("Speech engine unavailable: {e} — announcements disabled");
                sink.emit(&AppEvent::SpeechUnavailable);
            }
        }
    }

    /// Append one utterance to the engine's playback queue. No-op when the
    /// engine never came up.
    pub fn speak(&mut self, engine: &mut impl SpeechPort, text: &str, sink: &mut impl EventSink) {
        if !self.available {
            return;
        }
        engine.speak(text);
        sink.emit(&AppEvent::AnnouncementQueued);
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}
