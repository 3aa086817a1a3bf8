//! Platform audio: pronunciation URL derivation and the rodio-backed
//! playback handle.

use crate::error::PlaybackError;
use crate::playback::{AudioBackend, AudioSink};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;

/// Dictionary voice endpoint the pronunciation clips are fetched from.
pub const PRONUNCIATION_BASE_URL: &str = "https://dict.youdao.com/dictvoice";

/// Derive the pronunciation clip URL for a word token. The token is trimmed
/// and lower-cased so the same word always maps to the same resource.
pub fn pronunciation_url(word: &str) -> String {
    format!(
        "{PRONUNCIATION_BASE_URL}?type=0&audio={}",
        word.trim().to_lowercase()
    )
}

/// Audio backend that fetches clips over HTTP and plays them through the
/// default rodio output device.
pub struct RodioBackend {
    // Keeps the output device alive for as long as sinks reference it.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    client: reqwest::blocking::Client,
}

impl RodioBackend {
    /// Open the default output device. Fails when the platform has no usable
    /// audio output.
    pub fn new() -> Result<Self, PlaybackError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|err| PlaybackError::AudioUnavailable(err.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            client: reqwest::blocking::Client::new(),
        })
    }
}

impl AudioBackend for RodioBackend {
    fn open(&mut self, url: &str) -> Result<Box<dyn AudioSink>, PlaybackError> {
        let bytes = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .bytes()?
            .to_vec();
        let sink = Sink::try_new(&self.handle)
            .map_err(|err| PlaybackError::AudioUnavailable(err.to_string()))?;
        Ok(Box::new(RodioSink { sink, bytes }))
    }
}

struct RodioSink {
    sink: Sink,
    bytes: Vec<u8>,
}

impl AudioSink for RodioSink {
    fn play(&mut self) -> Result<(), PlaybackError> {
        // A fresh decode per attempt restarts the clip from the beginning.
        let source = Decoder::new(Cursor::new(self.bytes.clone()))
            .map_err(|err| PlaybackError::Decode(err.to_string()))?;
        self.sink.stop();
        self.sink.append(source);
        self.sink.play();
        Ok(())
    }

    fn halt(&mut self) {
        self.sink.pause();
        self.sink.stop();
    }

    fn finished(&self) -> bool {
        self.sink.empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_case_normalized_and_trimmed() {
        assert_eq!(
            pronunciation_url("  Example "),
            "https://dict.youdao.com/dictvoice?type=0&audio=example"
        );
    }

    #[test]
    fn same_word_always_maps_to_the_same_resource() {
        assert_eq!(pronunciation_url("CAT"), pronunciation_url("cat"));
    }
}
