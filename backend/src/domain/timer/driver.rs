//! Async driver owning the timer state and its tick task.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use mockable::Clock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CreatePracticeSessionRequest, NewPracticeSession, PracticeSessionCommand,
    PracticeSessionPayload,
};

use super::{
    PracticeTimer, SessionMetadata, TimerError, TimerState, default_session_name, format_hms,
};

const TICK_PERIOD: Duration = Duration::from_secs(1);

fn lock(timer: &Mutex<PracticeTimer>) -> MutexGuard<'_, PracticeTimer> {
    timer.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A running practice timer bound to a session command port.
///
/// At most one tick task exists at a time. It is aborted on pause, reset,
/// save and drop, and respawned when a failed save resumes a running timer. Must be used from within a Tokio runtime.
pub struct TimerSession {
    timer: Arc<Mutex<PracticeTimer>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    command: Arc<dyn PracticeSessionCommand>,
    clock: Arc<dyn Clock>,
}

impl TimerSession {
    pub fn new(command: Arc<dyn PracticeSessionCommand>, clock: Arc<dyn Clock>) -> Self {
        Self {
            timer: Arc::new(Mutex::new(PracticeTimer::default())),
            ticker: Mutex::new(None),
            command,
            clock,
        }
    }

    pub fn state(&self) -> TimerState {
        lock(&self.timer).state()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        lock(&self.timer).elapsed_seconds()
    }

    pub fn notes(&self) -> String {
        lock(&self.timer).notes().to_owned()
    }

    pub fn set_notes(&self, notes: impl Into<String>) {
        lock(&self.timer).set_notes(notes);
    }

    /// Elapsed time as `HH:MM:SS`.
    pub fn display(&self) -> String {
        format_hms(u64::from(self.elapsed_seconds()))
    }

    /// Starts or resumes the timer and its tick task.
    pub fn start(&self) -> Result<(), TimerError> {
        lock(&self.timer).start()?;
        self.spawn_ticker();
        info!(elapsed_seconds = self.elapsed_seconds(), "practice timer started");
        Ok(())
    }

    /// Pauses the timer; the partial second in progress is discarded.
    pub fn pause(&self) -> Result<(), TimerError> {
        lock(&self.timer).pause()?;
        self.stop_ticker();
        info!(elapsed_seconds = self.elapsed_seconds(), "practice timer paused");
        Ok(())
    }

    /// Stops the timer and clears elapsed time and notes.
    pub fn reset(&self) {
        self.stop_ticker();
        lock(&self.timer).reset();
        debug!("practice timer reset");
    }

    /// Persists the elapsed time as a practice session.
    ///
    /// The timer sits in [`TimerState::Saving`] while the port call is in
    /// flight, so `start`, `pause` and a second `save` fail with
    /// [`TimerError::SaveInProgress`]. A `reset` during that window wins over
    /// the outcome. Otherwise a stored save resets the timer, and a failed one
    /// restores the previous state with elapsed time and notes intact and
    /// returns the port error as [`TimerError::Persistence`].
    pub async fn save(
        &self,
        metadata: SessionMetadata,
    ) -> Result<PracticeSessionPayload, TimerError> {
        let (previous, request) = {
            let mut timer = lock(&self.timer);
            let previous = timer.begin_save()?;
            let request = CreatePracticeSessionRequest {
                session: self.build_session(metadata, &timer),
            };
            (previous, request)
        };
        self.stop_ticker();

        match self.command.create_session(request).await {
            Ok(response) => {
                if lock(&self.timer).complete_save() {
                    self.stop_ticker();
                } else {
                    debug!("practice timer was reset while saving");
                }
                info!(
                    session_id = %response.session.id,
                    duration_seconds = response.session.duration,
                    "practice session saved from timer"
                );
                Ok(response.session)
            }
            Err(error) => {
                let restored = lock(&self.timer).abandon_save(previous);
                if restored {
                    warn!(%error, %previous, "saving practice session failed; timer state restored");
                    if previous == TimerState::Running {
                        self.spawn_ticker();
                    }
                } else {
                    warn!(%error, "saving practice session failed after the timer was reset");
                }
                Err(TimerError::Persistence(error))
            }
        }
    }

    fn build_session(&self, metadata: SessionMetadata, timer: &PracticeTimer) -> NewPracticeSession {
        let name = metadata
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| default_session_name(self.clock.local().date_naive()));
        let notes = Some(timer.notes().to_owned()).filter(|notes| !notes.trim().is_empty());

        NewPracticeSession {
            name,
            description: metadata.description,
            notes,
            focus_area: metadata.focus_area,
            mood: metadata.mood,
            focus: metadata.focus,
            duration: timer.elapsed_seconds(),
        }
    }

    fn ticker_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spawn_ticker(&self) {
        let timer = Arc::clone(&self.timer);
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        let handle = tokio::spawn(async move {
            loop {
                interval.tick().await;
                // A tick racing a pause observes the paused state and is dropped.
                lock(&timer).tick();
            }
        });
        if let Some(previous) = self.ticker_slot().replace(handle) {
            previous.abort();
        }
    }

    fn stop_ticker(&self) {
        if let Some(handle) = self.ticker_slot().take() {
            handle.abort();
        }
    }
}

impl Drop for TimerSession {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
