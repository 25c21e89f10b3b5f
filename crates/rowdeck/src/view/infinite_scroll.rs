//! Infinite-scroll controller.
//!
//! A three-state machine driven by scroll events: `Stopped` → `Triggered`
//! when the viewport crosses a trailing threshold near the content end, then
//! immediately `Triggered` → `Loading`, which fires the delegate's load
//! callback exactly once and starts the loader animation. Only the returned
//! completion handle moves the machine back to `Stopped`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::traits::ScrollMetrics;

/// Default trailing distance, in points, at which loading triggers.
pub const DEFAULT_TRIGGER_DISTANCE: f32 = 200.0;

/// The infinite-scroll machine's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InfiniteScrollState {
    /// At rest; scroll events may trigger.
    #[default]
    Stopped,
    /// The trailing threshold has been crossed. Transient: promotion to
    /// [`Loading`](InfiniteScrollState::Loading) happens in the same scroll
    /// event.
    Triggered,
    /// A load is in flight. Scroll events are ignored until the completion
    /// handle fires.
    Loading,
}

/// The loader view animated while a load is in flight.
pub trait LoaderView: Send {
    /// Starts the loading animation.
    fn start_animating(&mut self);

    /// Stops the loading animation.
    fn stop_animating(&mut self);
}

/// Receiver of load requests.
///
/// Registered weakly: the controller never extends the delegate's lifetime.
/// If the delegate has been dropped by trigger time, the trigger is skipped.
pub trait InfiniteScrollDelegate: Send + Sync {
    /// Called exactly once per trigger. The delegate must invoke
    /// `completion.finish()` when its load ends; until then the controller
    /// stays in [`InfiniteScrollState::Loading`] and ignores scroll events.
    /// An unfulfilled completion leaves the machine loading permanently --
    /// an accepted trade-off, not papered over with timeouts.
    fn load_more(&self, completion: LoadCompletion);
}

/// State shared between the controller and outstanding completion handles.
struct Shared {
    state: InfiniteScrollState,
    loader: Box<dyn LoaderView>,
}

/// Idempotent completion handle for one load.
///
/// The delegate may invoke [`finish`](LoadCompletion::finish) at any later
/// point, on any thread; the first invocation returns the machine to
/// `Stopped` and stops the loader animation, any further invocation is a
/// logged no-op.
#[derive(Clone)]
pub struct LoadCompletion {
    shared: Arc<Mutex<Shared>>,
    finished: Arc<AtomicBool>,
}

impl LoadCompletion {
    fn new(shared: Arc<Mutex<Shared>>) -> Self {
        Self {
            shared,
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ends the load: stops the loader animation and returns the machine to
    /// [`InfiniteScrollState::Stopped`].
    pub fn finish(&self) {
        if self.finished.swap(true, Ordering::SeqCst) {
            tracing::debug!(
                target: "rowdeck::infinite_scroll",
                "completion invoked more than once; ignoring"
            );
            return;
        }
        let mut shared = self.shared.lock();
        shared.state = InfiniteScrollState::Stopped;
        shared.loader.stop_animating();
    }
}

/// Controller owned by the adapter once infinite scrolling is installed.
pub struct InfiniteScrollController {
    shared: Arc<Mutex<Shared>>,
    delegate: Weak<dyn InfiniteScrollDelegate>,
    trigger_distance: f32,
}

impl InfiniteScrollController {
    /// Creates a controller with the given delegate, loader view, and
    /// trailing trigger distance.
    pub fn new(
        delegate: Weak<dyn InfiniteScrollDelegate>,
        loader: Box<dyn LoaderView>,
        trigger_distance: f32,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: InfiniteScrollState::Stopped,
                loader,
            })),
            delegate,
            trigger_distance,
        }
    }

    /// The current state.
    pub fn state(&self) -> InfiniteScrollState {
        self.shared.lock().state
    }

    /// Feeds one scroll event into the machine.
    ///
    /// Content shorter than the viewport never triggers: the threshold would
    /// be trivially crossed while there is nothing to scroll toward.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        let crossed = metrics.content > metrics.viewport
            && metrics.trailing_distance() <= self.trigger_distance;

        let mut shared = self.shared.lock();
        match shared.state {
            InfiniteScrollState::Loading => {}
            InfiniteScrollState::Stopped | InfiniteScrollState::Triggered => {
                if !crossed {
                    shared.state = InfiniteScrollState::Stopped;
                    return;
                }
                shared.state = InfiniteScrollState::Triggered;

                let Some(delegate) = self.delegate.upgrade() else {
                    tracing::debug!(
                        target: "rowdeck::infinite_scroll",
                        "delegate dropped; not triggering"
                    );
                    shared.state = InfiniteScrollState::Stopped;
                    return;
                };

                // Adjacent transition: the trigger promotes to a load in the
                // same event, exactly once.
                shared.state = InfiniteScrollState::Loading;
                shared.loader.start_animating();
                drop(shared);

                tracing::debug!(target: "rowdeck::infinite_scroll", "load triggered");
                delegate.load_more(LoadCompletion::new(self.shared.clone()));
            }
        }
    }
}
