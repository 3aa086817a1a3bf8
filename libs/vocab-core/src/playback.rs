//! Pronunciation playback state machine.
//!
//! One playback session plays the current word's clip [`REPEAT_COUNT`] times
//! and then settles its completion signal. At most one session is live at a
//! time: starting a new one tears the previous one down first, so a stale
//! end-of-clip event can never feed the wrong session's counter.
//!
//! Outcome convention, applied uniformly: a session that runs all its repeats
//! settles [`PlaybackOutcome::Completed`]; a start or re-issue failure
//! settles [`PlaybackOutcome::Failed`]; an externally forced stop (explicit
//! [`PlaybackController::stop`], a superseding start, or a start with no
//! current word) settles [`PlaybackOutcome::Stopped`]. A signal is never
//! left permanently unsettled.

use crate::error::PlaybackError;
use std::time::Duration;
use tokio::sync::oneshot;

/// Times each word's pronunciation is played per session.
pub const REPEAT_COUNT: u32 = 3;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Terminal result of one playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// All repeats ran to their natural end.
    Completed,
    /// The platform refused to start or restart the clip.
    Failed,
    /// The session was torn down from outside before finishing.
    Stopped,
}

/// Identifies one playback session. Events carrying a superseded id are
/// ignored.
pub type SessionId = u64;

/// Single-shot completion signal for one session.
pub type Completion = oneshot::Receiver<PlaybackOutcome>;

/// A single owned playback handle for one clip.
///
/// `play` always (re)starts the clip from the beginning. Releasing the handle
/// is dropping it.
pub trait AudioSink {
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pause playback and reset the position.
    fn halt(&mut self);

    /// Whether the most recent `play` has run to its natural end.
    fn finished(&self) -> bool;
}

/// Creates playback handles for pronunciation clip URLs.
pub trait AudioBackend {
    fn open(&mut self, url: &str) -> Result<Box<dyn AudioSink>, PlaybackError>;
}

/// Handle returned by [`PlaybackController::start`].
pub struct ActivePlayback {
    pub session: SessionId,
    pub completion: Completion,
}

impl ActivePlayback {
    /// A signal that is already settled, for starts that never got a live
    /// session. Session id 0 is reserved for these.
    pub(crate) fn settled(outcome: PlaybackOutcome) -> Self {
        let (tx, completion) = oneshot::channel();
        let _ = tx.send(outcome);
        Self {
            session: 0,
            completion,
        }
    }
}

struct Session {
    id: SessionId,
    sink: Box<dyn AudioSink>,
    attempts: u32,
    done: oneshot::Sender<PlaybackOutcome>,
}

/// Drives the repeat sequence for one word and owns the single live audio
/// handle.
pub struct PlaybackController {
    backend: Box<dyn AudioBackend>,
    session: Option<Session>,
    next_id: SessionId,
}

impl PlaybackController {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            session: None,
            next_id: 1,
        }
    }

    /// Begin a session for `url`, tearing down any previous session first.
    ///
    /// An open or first-play failure settles the returned signal with
    /// `Failed` before this returns; there is no retry.
    pub fn start(&mut self, url: &str) -> ActivePlayback {
        self.stop();

        let id = self.next_id;
        self.next_id += 1;
        let (done, completion) = oneshot::channel();

        let mut sink = match self.backend.open(url) {
            Ok(sink) => sink,
            Err(err) => {
                tracing::warn!("could not open pronunciation clip: {err}");
                let _ = done.send(PlaybackOutcome::Failed);
                return ActivePlayback {
                    session: id,
                    completion,
                };
            }
        };
        if let Err(err) = sink.play() {
            tracing::warn!("playback failed to start: {err}");
            let _ = done.send(PlaybackOutcome::Failed);
            return ActivePlayback {
                session: id,
                completion,
            };
        }

        self.session = Some(Session {
            id,
            sink,
            attempts: 1,
            done,
        });
        ActivePlayback {
            session: id,
            completion,
        }
    }

    /// Feed an end-of-clip event for `session`.
    ///
    /// Re-issues the clip while the attempt count is below [`REPEAT_COUNT`]
    /// and settles `Completed` on the final end. Events for superseded or
    /// already-terminal sessions are ignored.
    pub fn clip_ended(&mut self, session: SessionId) {
        let Some(live) = self.session.as_mut() else {
            return;
        };
        if live.id != session {
            tracing::debug!(session, live = live.id, "ignoring stale end-of-clip event");
            return;
        }
        if live.attempts < REPEAT_COUNT {
            live.attempts += 1;
            if let Err(err) = live.sink.play() {
                tracing::warn!("playback failed on repeat: {err}");
                self.settle(PlaybackOutcome::Failed);
            }
        } else {
            self.settle(PlaybackOutcome::Completed);
        }
    }

    /// Whether `session` is live and its current clip has run to its end.
    pub fn clip_finished(&self, session: SessionId) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.id == session && s.sink.finished())
    }

    /// Tear down the live session, if any: halt the sink, release it, settle
    /// the signal with `Stopped`. Idempotent; a stop with no live session
    /// does nothing.
    pub fn stop(&mut self) {
        if let Some(mut live) = self.session.take() {
            live.sink.halt();
            let _ = live.done.send(PlaybackOutcome::Stopped);
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    fn settle(&mut self, outcome: PlaybackOutcome) {
        // Dropping the session releases the sink along with it.
        if let Some(live) = self.session.take() {
            let _ = live.done.send(outcome);
        }
    }
}

/// Pump end-of-clip events for `playback` until its session settles, then
/// return the outcome. Blocks the calling thread between polls.
pub fn drive(controller: &mut PlaybackController, playback: ActivePlayback) -> PlaybackOutcome {
    let ActivePlayback {
        session,
        mut completion,
    } = playback;
    loop {
        match completion.try_recv() {
            Ok(outcome) => return outcome,
            Err(oneshot::error::TryRecvError::Empty) => {}
            // The sender only disappears with its controller; treat that as
            // an external stop.
            Err(oneshot::error::TryRecvError::Closed) => return PlaybackOutcome::Stopped,
        }
        if controller.clip_finished(session) {
            controller.clip_ended(session);
            continue;
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
