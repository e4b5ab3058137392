//! Log-backed speech adapter.
//!
//! Placeholder [`SpeechPort`] implementation that prints utterances instead
//! of synthesizing them. A real TTS engine binding (espeak-ng or a cloud
//! voice) replaces this behind the same trait; its append-only queueing
//! contract is what the announcer relies on.

use crate::app::ports::SpeechPort;
use crate::error::SpeechError;

#[derive(Default)]
pub struct LogSpeech;

impl LogSpeech {
    pub fn new() -> Self {
        Self
    }
}

impl SpeechPort for LogSpeech {
    fn configure(&mut self, locale: &str, pitch: f32) -> Result<(), SpeechError> {
        log::info!("Speech configured: locale={locale} pitch={pitch}");
        Ok(())
    }

    fn speak(&mut self, text: &str) {
        log::info!("Speaking: \"{text}\"");
    }
}
