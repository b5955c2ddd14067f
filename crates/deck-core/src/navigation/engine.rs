//! Navigation engine implementation

use super::{
    CompletionQueue, Direction, NavigationContext, NavigationError, NavigationMode,
    NavigationSubscriber, PendingCompletion,
};
use parking_lot::{Mutex, RwLock};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, info};

/// Delay between requesting a jump and the slide taking over
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(600);

/// Navigation state stored internally
#[derive(Debug, Clone)]
struct EngineState {
    context: NavigationContext,
    /// Simulated clock, advanced by the host loop
    now: Duration,
    /// When the in-flight transition was requested
    transition_started: Option<Duration>,
    disposed: bool,
}

impl EngineState {
    /// Switch to the overview, dropping any pending jump
    fn enter_overview(&mut self) {
        self.context.transition_token += 1;
        self.context.mode = NavigationMode::Overview;
        self.context.active_index = None;
        self.context.pending_target = None;
        self.transition_started = None;
    }
}

/// The navigation state machine.
///
/// Single writer: only the intent methods and [`NavigationEngine::advance`]
/// change state. Readers get cloned [`NavigationContext`] snapshots.
pub struct NavigationEngine {
    state: Arc<RwLock<EngineState>>,
    completions: Arc<Mutex<CompletionQueue>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn NavigationSubscriber>>>>,
    transition_delay: Duration,
}

impl NavigationEngine {
    /// Create an engine for a deck of `slide_count` slides, starting in overview
    pub fn new(slide_count: usize) -> Self {
        Self::with_transition_delay(slide_count, DEFAULT_TRANSITION_DELAY)
    }

    /// Create an engine with a custom jump delay
    pub fn with_transition_delay(slide_count: usize, transition_delay: Duration) -> Self {
        let state = EngineState {
            context: NavigationContext::initial(slide_count),
            now: Duration::ZERO,
            transition_started: None,
            disposed: false,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            completions: Arc::new(Mutex::new(CompletionQueue::new())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            transition_delay,
        }
    }

    /// Deck length this engine was created for
    pub fn slide_count(&self) -> usize {
        self.state.read().context.slide_count
    }

    pub fn transition_delay(&self) -> Duration {
        self.transition_delay
    }

    /// Current simulated time
    pub fn now(&self) -> Duration {
        self.state.read().now
    }

    /// Jump to slide `index` through a zoom transition.
    ///
    /// Accepted from any mode; a newer jump supersedes one still in flight.
    pub fn select_slide(&self, index: usize) -> Result<(), NavigationError> {
        let mut state = self.state.write();
        if state.disposed {
            return Err(NavigationError::Disposed);
        }

        let count = state.context.slide_count;
        if index >= count {
            debug!("Rejecting jump to slide {} (deck has {})", index, count);
            return Err(NavigationError::OutOfRange { index, count });
        }

        state.context.transition_token += 1;
        let token = state.context.transition_token;
        state.context.mode = NavigationMode::Transitioning;
        state.context.direction = Direction::Jump;
        state.context.pending_target = Some(index);
        state.context.active_index = None;
        state.transition_started = Some(state.now);

        let due = state.now + self.transition_delay;
        drop(state);

        self.completions.lock().schedule(PendingCompletion {
            token,
            target: index,
            due,
        });
        debug!("Jump to slide {} scheduled (token {})", index, token);

        self.notify_subscribers();
        Ok(())
    }

    /// Navigate forward by one slide; past the last slide returns to the overview
    pub fn next(&self) -> Result<(), NavigationError> {
        self.step(Direction::Forward)
    }

    /// Navigate backward by one slide; before the first slide returns to the overview
    pub fn previous(&self) -> Result<(), NavigationError> {
        self.step(Direction::Backward)
    }

    /// Return to the overview immediately, invalidating any in-flight jump
    pub fn to_overview(&self) -> Result<(), NavigationError> {
        let mut state = self.state.write();
        if state.disposed {
            return Err(NavigationError::Disposed);
        }

        state.enter_overview();
        drop(state);

        debug!("Returned to overview");
        self.notify_subscribers();
        Ok(())
    }

    /// Jump to the first slide
    pub fn jump_home(&self) -> Result<(), NavigationError> {
        self.select_slide(0)
    }

    /// Jump to the last slide
    pub fn jump_end(&self) -> Result<(), NavigationError> {
        self.select_slide(self.slide_count().saturating_sub(1))
    }

    /// Advance the simulated clock and fire due completions.
    ///
    /// Returns how many completions were applied; stale ones are discarded.
    pub fn advance(&self, dt: Duration) -> usize {
        let now = {
            let mut state = self.state.write();
            if state.disposed {
                return 0;
            }
            state.now += dt;
            state.now
        };

        let due = self.completions.lock().take_due(now);
        let mut applied = 0;
        for completion in due {
            if self.complete(completion) {
                applied += 1;
                self.notify_subscribers();
            }
        }
        applied
    }

    /// Progress of the in-flight jump in `[0, 1]`, `None` when not transitioning
    pub fn transition_progress(&self) -> Option<f32> {
        let state = self.state.read();
        if state.context.mode != NavigationMode::Transitioning {
            return None;
        }

        let started = state.transition_started?;
        if self.transition_delay.is_zero() {
            return Some(1.0);
        }
        let elapsed = state.now.saturating_sub(started);
        Some((elapsed.as_secs_f32() / self.transition_delay.as_secs_f32()).min(1.0))
    }

    /// Number of scheduled completions, stale ones included
    pub fn pending_completions(&self) -> usize {
        self.completions.lock().len()
    }

    /// Get current navigation context
    pub fn get_context(&self) -> NavigationContext {
        self.state.read().context.clone()
    }

    /// Tear down: cancel pending completions and drop subscribers.
    ///
    /// Every later intent returns [`NavigationError::Disposed`].
    pub fn dispose(&self) {
        let mut state = self.state.write();
        if state.disposed {
            return;
        }
        state.disposed = true;
        drop(state);

        let cancelled = self.completions.lock().cancel_all();
        self.subscribers.write().clear();
        info!("Navigation disposed ({} pending completion(s) cancelled)", cancelled);
    }

    pub fn is_disposed(&self) -> bool {
        self.state.read().disposed
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Synchronous step within presenting mode; the mode check and the
    /// move happen under one write lock
    fn step(&self, direction: Direction) -> Result<(), NavigationError> {
        let intent = match direction {
            Direction::Backward => "previous",
            _ => "next",
        };

        let mut state = self.state.write();
        if state.disposed {
            return Err(NavigationError::Disposed);
        }

        let current = match (state.context.mode, state.context.active_index) {
            (NavigationMode::Presenting, Some(index)) => index,
            (mode, _) => {
                debug!("Ignoring {} while {:?}", intent, mode);
                return Err(NavigationError::NotPresenting { intent, mode });
            }
        };

        let slide_count = state.context.slide_count;
        let target = match direction {
            Direction::Backward => current.checked_sub(1),
            _ => Some(current + 1).filter(|next| *next < slide_count),
        };

        match target {
            Some(index) => {
                state.context.transition_token += 1;
                state.context.direction = direction;
                state.context.active_index = Some(index);
            }
            None => {
                state.enter_overview();
                debug!("Stepped past slide {}, returned to overview", current + 1);
            }
        }
        drop(state);

        self.notify_subscribers();
        Ok(())
    }

    /// Apply a fired completion if its token is still current
    fn complete(&self, completion: PendingCompletion) -> bool {
        let mut state = self.state.write();
        if state.disposed {
            return false;
        }

        let context = &mut state.context;
        if context.transition_token != completion.token
            || context.mode != NavigationMode::Transitioning
        {
            debug!(
                "Discarding stale completion for slide {} (token {}, current {})",
                completion.target, completion.token, context.transition_token
            );
            return false;
        }

        context.mode = NavigationMode::Presenting;
        context.active_index = Some(completion.target);
        context.pending_target = None;
        state.transition_started = None;
        info!("Presenting slide {}", completion.target);
        true
    }

    /// Notify all subscribers of navigation change
    fn notify_subscribers(&self) {
        let context = self.get_context();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        // Notify live subscribers
        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_navigation_change(&context);
            }
        }
    }
}
