//! Periodic draft autosave.
//!
//! Every interval the autosaver reads the post form and, unless the post has
//! been published, submits it as a draft. A failed save is only logged: the
//! next tick is the retry.
//!
//! Ticks never wait on each other. If a save is still in flight when the
//! timer fires again, the new tick starts anyway and both requests are polled
//! side by side.

use std::time::Duration;

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tokio_util::sync::CancellationToken;

use crate::draft::{DocumentState, DraftDocument, DraftFields};
use crate::sink::{DraftSink, SaveStatus};

/// Result of a single autosave tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The post is published; nothing was sent.
    SkippedPublished,
    /// The server accepted the draft.
    Saved(SaveStatus),
    /// The server answered with a non-success status.
    Rejected(SaveStatus),
    /// The form could not be read or the request failed.
    Failed(String),
}

/// Shared stop flag for a running autosave loop.
///
/// Once stopped it stays stopped, and every clone observes it.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(CancellationToken);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.0.is_cancelled()
    }

    /// Resolves once `stop` has been called.
    pub async fn stopped(&self) {
        self.0.cancelled().await;
    }
}

/// Handle to an autosave loop started with [`Autosaver::start`].
///
/// Dropping the handle leaves the loop running for the rest of the page's
/// life; call [`AutosaveHandle::stop`] to tear it down.
#[derive(Debug)]
pub struct AutosaveHandle {
    signal: StopSignal,
}

impl AutosaveHandle {
    /// Stop the loop. Requests still in flight are dropped.
    pub fn stop(self) {
        tracing::debug!("stopping draft autosave");
        self.signal.stop();
    }

    pub fn signal(&self) -> &StopSignal {
        &self.signal
    }
}

/// Recurring draft saver over a form and a sink.
pub struct Autosaver<F, S> {
    fields: F,
    sink: S,
    interval: Duration,
}

impl<F, S> Autosaver<F, S>
where
    F: DraftFields,
    S: DraftSink,
{
    pub fn new(fields: F, sink: S, interval: Duration) -> Self {
        Self {
            fields,
            sink,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one save attempt.
    pub async fn tick(&self) -> TickOutcome {
        let state = match DocumentState::read(&self.fields) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "could not read publish date, skipping autosave");
                return TickOutcome::Failed(e.to_string());
            }
        };

        if state == DocumentState::Published {
            tracing::trace!("post is published, skipping autosave");
            return TickOutcome::SkippedPublished;
        }

        let draft = match DraftDocument::capture(&self.fields) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(error = %e, "could not read draft fields");
                return TickOutcome::Failed(e.to_string());
            }
        };

        let started = web_time::Instant::now();
        match self.sink.save(&draft).await {
            Ok(status) if status.is_saved() => {
                tracing::info!(
                    %status,
                    elapsed = ?started.elapsed(),
                    "successfully saved draft"
                );
                TickOutcome::Saved(status)
            }
            Ok(status) => {
                tracing::warn!(%status, "draft save rejected");
                TickOutcome::Rejected(status)
            }
            Err(e) => {
                tracing::warn!(error = %e, "draft save failed");
                TickOutcome::Failed(e.to_string())
            }
        }
    }

    /// Tick every interval until `stop` fires.
    ///
    /// The first tick happens one full interval after the loop starts.
    pub async fn run(&self, stop: &StopSignal) {
        let mut ticker = n0_future::time::interval(self.interval);
        // The first tick completes immediately.
        ticker.tick().await;

        let mut in_flight = FuturesUnordered::new();
        loop {
            tokio::select! {
                biased;
                _ = stop.stopped() => {
                    tracing::debug!(in_flight = in_flight.len(), "draft autosave stopped");
                    break;
                }
                _ = ticker.tick() => {
                    in_flight.push(self.tick());
                }
                Some(outcome) = in_flight.next(), if !in_flight.is_empty() => {
                    tracing::trace!(?outcome, "autosave tick finished");
                }
            }
        }
    }
}

impl<F, S> Autosaver<F, S>
where
    F: DraftFields + 'static,
    S: DraftSink + 'static,
{
    /// Spawn the loop on the local executor.
    ///
    /// In the browser this is the page's event loop. Natively it must be
    /// called from inside a `tokio::task::LocalSet`.
    pub fn start(self) -> AutosaveHandle {
        let signal = StopSignal::new();
        let loop_signal = signal.clone();

        tracing::info!(interval = ?self.interval, "started auto save for drafts");
        spawn_local(async move {
            self.run(&loop_signal).await;
        });

        AutosaveHandle { signal }
    }
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
fn spawn_local<Fut>(fut: Fut)
where
    Fut: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
fn spawn_local<Fut>(fut: Fut)
where
    Fut: std::future::Future<Output = ()> + 'static,
{
    drop(tokio::task::spawn_local(fut));
}
