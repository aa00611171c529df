//! Trailing-call debouncing
//!
//! A [`Debouncer`] collapses bursts of calls into one trailing invocation:
//! each call cancels the previously scheduled action and schedules its own
//! to run after the configured delay. The pending action is an explicit
//! cancellable tokio task rather than shared timer state, so at most one
//! scheduled action exists at a time and no two invocations can overlap.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

/// Collapses repeated calls within a delay window into one trailing call.
///
/// Must be used inside a tokio runtime context; scheduling spawns onto the
/// ambient runtime. Dropping the debouncer cancels whatever is pending.
///
/// # Example
/// ```rust,no_run
/// use std::time::Duration;
/// use frontdesk::Debouncer;
///
/// # async fn example() {
/// let mut save = Debouncer::new(Duration::from_millis(300));
/// // Only the last of these runs, 300ms after the final call.
/// save.call(|| println!("saved"));
/// save.call(|| println!("saved"));
/// # }
/// ```
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the given trailing delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The configured trailing delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `action` to run after the delay, replacing any pending call.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        self.schedule(async move {
            time::sleep(delay).await;
            action();
        });
    }

    /// Schedules an async action to run after the delay, replacing any
    /// pending call. The future only starts executing once the delay has
    /// elapsed without another call.
    pub fn call_async<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        self.schedule(async move {
            time::sleep(delay).await;
            action.await;
        });
    }

    /// True while a scheduled call is waiting out its delay (or running).
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Cancels the pending call, if any, without running it.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(task));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
