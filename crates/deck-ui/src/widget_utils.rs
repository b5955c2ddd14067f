//! Widget utilities for managing IDs and preventing conflicts
//!
//! The overview draws one interactive node per slide and the slide view
//! nests scroll areas and grids per slide, so every id is built from the
//! slide's identity.

use egui::{Grid, Id, ScrollArea};
use std::fmt::Display;

/// Widget ID builder that ensures unique IDs by combining multiple components
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    /// Create a new widget ID builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Add an index to the ID (useful in loops)
    pub fn index(self, idx: usize) -> Self {
        self.with(format!("idx_{}", idx))
    }

    /// Build the final ID string
    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Create an egui ID from this widget ID
    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// Extension trait for ScrollArea to easily add unique IDs
pub trait ScrollAreaExt {
    /// Set the ID source using a WidgetId builder
    fn id_builder(self, builder: WidgetId) -> Self;
}

impl ScrollAreaExt for ScrollArea {
    fn id_builder(self, builder: WidgetId) -> Self {
        self.id_source(builder.build())
    }
}

/// Extension trait for Grid to easily add unique IDs
pub trait GridExt {
    /// Create a new grid with a WidgetId builder
    fn new_with_id(builder: WidgetId) -> Self;
}

impl GridExt for Grid {
    fn new_with_id(builder: WidgetId) -> Self {
        Grid::new(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_builder() {
        let id = WidgetId::new("overview_node")
            .with("deck")
            .index(5)
            .build();
        assert_eq!(id, "overview_node_deck_idx_5");
    }

    #[test]
    fn test_node_ids_are_distinct() {
        let a = WidgetId::new("overview_node").index(1).id();
        let b = WidgetId::new("overview_node").index(2).id();
        assert_ne!(a, b);
    }
}
