//! Navigation subscriber trait

use super::NavigationContext;

/// Trait for components that need to respond to navigation changes
pub trait NavigationSubscriber: Send + Sync {
    /// Called with the new snapshot after every applied transition
    fn on_navigation_change(&self, context: &NavigationContext);
}
