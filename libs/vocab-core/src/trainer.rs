//! View-facing surface tying word progression to pronunciation playback.

use crate::audio::pronunciation_url;
use crate::error::LoadError;
use crate::loader::WordSource;
use crate::playback::{ActivePlayback, PlaybackController, PlaybackOutcome};
use crate::progress::ProgressStore;
use crate::types::WordRecord;

/// Facade over the progress store and the playback controller.
///
/// Navigation always stops playback before the cursor moves, so an in-flight
/// repeat of the previous word can never count against the new one. The
/// store itself never touches the audio handle.
pub struct Trainer {
    store: ProgressStore,
    playback: PlaybackController,
}

impl Trainer {
    pub fn new(store: ProgressStore, playback: PlaybackController) -> Self {
        Self { store, playback }
    }

    /// Replace the word list. Any running playback belongs to the old list
    /// and is stopped first.
    pub fn load(&mut self, source: &mut dyn WordSource) -> Result<usize, LoadError> {
        self.playback.stop();
        self.store.load(source)
    }

    /// Restore the cursor and marker from a previous session.
    pub fn restore_progress(&mut self) {
        self.store.restore_progress();
    }

    pub fn current_word(&self) -> Option<&WordRecord> {
        self.store.current_word()
    }

    /// Advance to the next word, stopping playback before the cursor moves.
    pub fn next(&mut self) {
        self.playback.stop();
        self.store.next();
    }

    /// Step back one word, stopping playback before the cursor moves.
    pub fn previous(&mut self) {
        self.playback.stop();
        self.store.previous();
    }

    /// Start the repeat sequence for the current word. With no list loaded
    /// this is a no-op that settles immediately with the neutral
    /// [`PlaybackOutcome::Stopped`].
    pub fn play(&mut self) -> ActivePlayback {
        match self.store.current_word() {
            Some(word) => {
                let url = pronunciation_url(&word.word);
                self.playback.start(&url)
            }
            None => ActivePlayback::settled(PlaybackOutcome::Stopped),
        }
    }

    /// Advance and immediately pronounce the new word.
    pub fn next_and_play(&mut self) -> ActivePlayback {
        self.next();
        self.play()
    }

    /// Stop any running playback. Idempotent.
    pub fn stop(&mut self) {
        self.playback.stop();
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackController {
        &mut self.playback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;
    use crate::playback::{AudioBackend, AudioSink};
    use crate::storage::MemoryStorage;
    use crate::types::WordRecord;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct VecSource(Vec<WordRecord>);

    impl WordSource for VecSource {
        fn load(&mut self) -> Result<Vec<WordRecord>, LoadError> {
            Ok(self.0.clone())
        }
    }

    struct QuietSink;

    impl AudioSink for QuietSink {
        fn play(&mut self) -> Result<(), PlaybackError> {
            Ok(())
        }

        fn halt(&mut self) {}

        fn finished(&self) -> bool {
            false
        }
    }

    /// Records the clip URLs it was asked to open.
    #[derive(Clone, Default)]
    struct RecordingBackend(Rc<RefCell<Vec<String>>>);

    impl AudioBackend for RecordingBackend {
        fn open(&mut self, url: &str) -> Result<Box<dyn AudioSink>, PlaybackError> {
            self.0.borrow_mut().push(url.to_string());
            Ok(Box::new(QuietSink))
        }
    }

    fn word(token: &str) -> WordRecord {
        WordRecord {
            word: token.to_string(),
            meaning: String::new(),
            phonetic: String::new(),
            initial: String::new(),
        }
    }

    fn trainer_with_words(tokens: &[&str]) -> (Trainer, RecordingBackend) {
        let backend = RecordingBackend::default();
        let store = ProgressStore::new(Box::new(MemoryStorage::default()));
        let playback = PlaybackController::new(Box::new(backend.clone()));
        let mut trainer = Trainer::new(store, playback);
        if !tokens.is_empty() {
            let mut source = VecSource(tokens.iter().map(|t| word(t)).collect());
            trainer.load(&mut source).unwrap();
        }
        (trainer, backend)
    }

    #[test]
    fn navigation_stops_playback_before_moving_the_cursor() {
        let (mut trainer, _backend) = trainer_with_words(&["cat", "dog"]);

        let mut playback = trainer.play();
        trainer.next();

        assert_eq!(
            playback.completion.try_recv().unwrap(),
            PlaybackOutcome::Stopped
        );
        assert!(!trainer.playback_mut().is_active());
        assert_eq!(trainer.current_word().unwrap().word, "dog");
    }

    #[test]
    fn play_derives_the_clip_url_from_the_current_word() {
        let (mut trainer, backend) = trainer_with_words(&["Cat"]);
        let _playback = trainer.play();
        assert_eq!(
            backend.0.borrow()[0],
            "https://dict.youdao.com/dictvoice?type=0&audio=cat"
        );
    }

    #[test]
    fn play_with_no_list_settles_the_neutral_outcome() {
        let (mut trainer, backend) = trainer_with_words(&[]);
        let mut playback = trainer.play();
        assert_eq!(
            playback.completion.try_recv().unwrap(),
            PlaybackOutcome::Stopped
        );
        assert!(backend.0.borrow().is_empty());
    }

    #[test]
    fn next_and_play_supersedes_the_old_session() {
        let (mut trainer, backend) = trainer_with_words(&["cat", "dog"]);

        let mut old = trainer.play();
        let fresh = trainer.next_and_play();

        assert_eq!(old.completion.try_recv().unwrap(), PlaybackOutcome::Stopped);
        assert!(trainer.playback_mut().is_active());
        assert_ne!(old.session, fresh.session);
        assert_eq!(backend.0.borrow().len(), 2);
        assert!(backend.0.borrow()[1].ends_with("audio=dog"));
    }

    #[test]
    fn load_stops_playback_from_the_old_list() {
        let (mut trainer, _backend) = trainer_with_words(&["cat"]);
        let mut playback = trainer.play();

        let mut source = VecSource(vec![word("dog")]);
        trainer.load(&mut source).unwrap();

        assert_eq!(
            playback.completion.try_recv().unwrap(),
            PlaybackOutcome::Stopped
        );
        assert!(!trainer.playback_mut().is_active());
    }

    #[test]
    fn stop_is_idempotent_through_the_facade() {
        let (mut trainer, _backend) = trainer_with_words(&["cat"]);
        trainer.stop();
        trainer.stop();
        assert!(!trainer.playback_mut().is_active());
    }
}
