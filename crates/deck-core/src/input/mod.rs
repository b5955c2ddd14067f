//! Keyboard routing into the navigation engine

use crate::navigation::{NavigationEngine, NavigationError};
use std::sync::{Arc, Weak};
use tracing::debug;

/// A navigation request produced by a key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    JumpHome,
    JumpEnd,
    ToOverview,
}

/// Map a key to its intent; unbound keys map to `None`
pub fn intent_for_key(key: egui::Key) -> Option<Intent> {
    match key {
        egui::Key::ArrowRight | egui::Key::Space => Some(Intent::Next),
        egui::Key::ArrowLeft => Some(Intent::Previous),
        egui::Key::Home => Some(Intent::JumpHome),
        egui::Key::End => Some(Intent::JumpEnd),
        egui::Key::Escape => Some(Intent::ToOverview),
        _ => None,
    }
}

impl Intent {
    /// Apply this intent to `engine`
    pub fn apply(self, engine: &NavigationEngine) -> Result<(), NavigationError> {
        match self {
            Intent::Next => engine.next(),
            Intent::Previous => engine.previous(),
            Intent::JumpHome => engine.jump_home(),
            Intent::JumpEnd => engine.jump_end(),
            Intent::ToOverview => engine.to_overview(),
        }
    }
}

/// Forwards keyboard intents to a live engine while it is presenting.
///
/// Holds only a weak reference: a dropped or disposed engine never receives input.
#[derive(Debug, Default)]
pub struct InputRouter {
    engine: Option<Weak<NavigationEngine>>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening on behalf of `engine`, replacing any previous attachment
    pub fn attach(&mut self, engine: &Arc<NavigationEngine>) {
        self.engine = Some(Arc::downgrade(engine));
        debug!("Input router attached");
    }

    /// Stop listening
    pub fn detach(&mut self) {
        if self.engine.take().is_some() {
            debug!("Input router detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.engine.is_some()
    }

    /// The engine input should go to right now, if any
    fn live_engine(&self) -> Option<Arc<NavigationEngine>> {
        let engine = self.engine.as_ref()?.upgrade()?;
        if engine.is_disposed() || !engine.get_context().is_presenting() {
            return None;
        }
        Some(engine)
    }

    /// Whether a key press would be handled right now
    pub fn is_active(&self) -> bool {
        self.live_engine().is_some()
    }

    /// Forward `intent` to the engine. Returns false when the router is inactive.
    pub fn dispatch(&self, intent: Intent) -> bool {
        let Some(engine) = self.live_engine() else {
            debug!("Dropping {:?}: router inactive", intent);
            return false;
        };

        // Rejections are expected races (e.g. Escape after a jump started)
        let _ = intent.apply(&engine);
        true
    }

    /// Consume bound key presses from this frame's input and dispatch them
    /// in the order they were pressed.
    ///
    /// Keys are only consumed while the router is active, so other widgets
    /// keep them otherwise. Returns the intents that were dispatched.
    pub fn handle_input(&self, ctx: &egui::Context) -> Vec<Intent> {
        if !self.is_active() {
            return Vec::new();
        }

        let pressed = ctx.input_mut(|input| take_bound_presses(&mut input.events));

        pressed
            .into_iter()
            .filter(|intent| self.dispatch(*intent))
            .collect()
    }
}

/// Remove every unmodified press of a bound key from `events`, returning
/// their intents in event order. Repeated presses each yield an intent.
fn take_bound_presses(events: &mut Vec<egui::Event>) -> Vec<Intent> {
    let mut intents = Vec::new();
    events.retain(|event| {
        let egui::Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } = event
        else {
            return true;
        };
        if !modifiers.is_none() {
            return true;
        }
        match intent_for_key(*key) {
            Some(intent) => {
                intents.push(intent);
                false
            }
            None => true,
        }
    });
    intents
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn release(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Run one frame with `events` and report what the router dispatched
    /// together with the events left for other widgets
    fn run_frame(router: &InputRouter, events: Vec<egui::Event>) -> (Vec<Intent>, Vec<egui::Event>) {
        let ctx = egui::Context::default();
        let raw = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut dispatched = Vec::new();
        let mut remaining = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            dispatched = router.handle_input(ctx);
            remaining = ctx.input(|i| i.events.clone());
        });
        (dispatched, remaining)
    }

    fn presenting_engine(count: usize, index: usize) -> Arc<NavigationEngine> {
        let engine = Arc::new(NavigationEngine::new(count));
        engine.select_slide(index).unwrap();
        engine.advance(Duration::from_secs(1));
        engine
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(intent_for_key(egui::Key::ArrowRight), Some(Intent::Next));
        assert_eq!(intent_for_key(egui::Key::Space), Some(Intent::Next));
        assert_eq!(intent_for_key(egui::Key::ArrowLeft), Some(Intent::Previous));
        assert_eq!(intent_for_key(egui::Key::Home), Some(Intent::JumpHome));
        assert_eq!(intent_for_key(egui::Key::End), Some(Intent::JumpEnd));
        assert_eq!(intent_for_key(egui::Key::Escape), Some(Intent::ToOverview));
        assert_eq!(intent_for_key(egui::Key::A), None);
        assert_eq!(intent_for_key(egui::Key::ArrowUp), None);
    }

    #[test]
    fn test_dispatch_while_presenting() {
        let engine = presenting_engine(5, 1);
        let mut router = InputRouter::new();
        router.attach(&engine);

        assert!(router.dispatch(Intent::Next));
        assert_eq!(engine.get_context().active_index, Some(2));

        assert!(router.dispatch(Intent::ToOverview));
        assert!(engine.get_context().is_overview());
    }

    #[test]
    fn test_ignored_when_detached() {
        let engine = presenting_engine(5, 1);
        let mut router = InputRouter::new();
        assert!(!router.dispatch(Intent::Next));

        router.attach(&engine);
        router.detach();
        assert!(!router.is_attached());
        assert!(!router.dispatch(Intent::Next));
        assert_eq!(engine.get_context().active_index, Some(1));
    }

    #[test]
    fn test_ignored_outside_presenting() {
        let engine = Arc::new(NavigationEngine::new(5));
        let mut router = InputRouter::new();
        router.attach(&engine);

        assert!(!router.dispatch(Intent::JumpEnd));
        assert!(engine.get_context().is_overview());

        engine.select_slide(2).unwrap();
        assert!(!router.dispatch(Intent::ToOverview));
        assert!(engine.get_context().is_transitioning());
    }

    #[test]
    fn test_ignored_after_dispose_or_drop() {
        let engine = presenting_engine(5, 3);
        let mut router = InputRouter::new();
        router.attach(&engine);

        engine.dispose();
        assert!(!router.is_active());
        assert!(!router.dispatch(Intent::Previous));

        let engine = presenting_engine(5, 3);
        router.attach(&engine);
        drop(engine);
        assert!(!router.dispatch(Intent::Previous));
    }

    #[test]
    fn test_jump_end_from_presenting_starts_transition() {
        let engine = presenting_engine(5, 0);
        let mut router = InputRouter::new();
        router.attach(&engine);

        assert!(router.dispatch(Intent::JumpEnd));
        let context = engine.get_context();
        assert!(context.is_transitioning());
        assert_eq!(context.pending_target, Some(4));

        // router goes quiet until the jump lands
        assert!(!router.is_active());
        engine.advance(Duration::from_secs(1));
        assert!(router.is_active());
    }

    #[test]
    fn test_handle_input_without_events_dispatches_nothing() {
        let engine = presenting_engine(5, 2);
        let mut router = InputRouter::new();
        router.attach(&engine);

        let ctx = egui::Context::default();
        assert!(router.handle_input(&ctx).is_empty());
        assert_eq!(engine.get_context().active_index, Some(2));
    }

    #[test]
    fn test_repeated_presses_in_one_frame_each_step() {
        let engine = presenting_engine(10, 2);
        let mut router = InputRouter::new();
        router.attach(&engine);

        let (dispatched, _) = run_frame(
            &router,
            vec![press(egui::Key::ArrowRight), press(egui::Key::ArrowRight)],
        );
        assert_eq!(dispatched, vec![Intent::Next, Intent::Next]);
        assert_eq!(engine.get_context().active_index, Some(4));
    }

    #[test]
    fn test_presses_dispatch_in_arrival_order() {
        let engine = presenting_engine(10, 2);
        let mut router = InputRouter::new();
        router.attach(&engine);

        let (dispatched, _) = run_frame(
            &router,
            vec![
                press(egui::Key::ArrowLeft),
                press(egui::Key::ArrowRight),
                press(egui::Key::Space),
            ],
        );
        assert_eq!(dispatched, vec![Intent::Previous, Intent::Next, Intent::Next]);
        assert_eq!(engine.get_context().active_index, Some(3));
    }

    #[test]
    fn test_keys_after_leaving_presenting_are_not_dispatched() {
        let engine = presenting_engine(10, 2);
        let mut router = InputRouter::new();
        router.attach(&engine);

        let (dispatched, _) = run_frame(
            &router,
            vec![press(egui::Key::Escape), press(egui::Key::ArrowRight)],
        );
        assert_eq!(dispatched, vec![Intent::ToOverview]);
        assert!(engine.get_context().is_overview());
    }

    #[test]
    fn test_handled_keys_are_consumed_and_others_kept() {
        let engine = presenting_engine(10, 2);
        let mut router = InputRouter::new();
        router.attach(&engine);

        let (dispatched, remaining) = run_frame(
            &router,
            vec![
                press(egui::Key::A),
                press(egui::Key::ArrowRight),
                release(egui::Key::ArrowRight),
                press(egui::Key::Home),
            ],
        );
        assert_eq!(dispatched, vec![Intent::Next, Intent::JumpHome]);
        assert_eq!(
            remaining,
            vec![press(egui::Key::A), release(egui::Key::ArrowRight)]
        );
    }

    #[test]
    fn test_modified_keys_are_left_alone() {
        let engine = presenting_engine(10, 2);
        let mut router = InputRouter::new();
        router.attach(&engine);

        let ctrl_right = egui::Event::Key {
            key: egui::Key::ArrowRight,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::CTRL,
        };
        let (dispatched, remaining) = run_frame(&router, vec![ctrl_right.clone()]);
        assert!(dispatched.is_empty());
        assert_eq!(remaining, vec![ctrl_right]);
        assert_eq!(engine.get_context().active_index, Some(2));
    }

    #[test]
    fn test_nothing_consumed_outside_presenting() {
        let engine = Arc::new(NavigationEngine::new(10));
        let mut router = InputRouter::new();
        router.attach(&engine);
        let events = vec![press(egui::Key::ArrowRight), press(egui::Key::Escape)];

        // overview
        let (dispatched, remaining) = run_frame(&router, events.clone());
        assert!(dispatched.is_empty());
        assert_eq!(remaining, events);

        // transitioning
        engine.select_slide(4).unwrap();
        let (dispatched, remaining) = run_frame(&router, events.clone());
        assert!(dispatched.is_empty());
        assert_eq!(remaining, events);
        assert_eq!(engine.get_context().pending_target, Some(4));
    }
}
