//! Slide records and the deck they live in
//!
//! The navigation core only ever reads a slide's position and id. Everything
//! else on a record is carried for the renderer.

use serde::{Deserialize, Serialize};

/// Stable identity of a slide (1-based in authored decks)
pub type SlideId = u32;

/// A single slide as authored in the deck catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Stable identifier
    pub id: SlideId,

    /// Display title
    pub title: String,

    /// Optional subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Glyph shown on the slide's overview node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,

    /// Authors (cover and thank-you slides)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    /// Tagged content payload
    pub body: SlideBody,
}

/// Content shape of a slide; one variant per layout template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlideBody {
    Cover,
    Toc {
        items: Vec<String>,
    },
    Content {
        body: ContentBody,
    },
    Diagram {
        body: DiagramBody,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Terminal {
        #[serde(default = "default_prompt")]
        prompt: String,
        commands: Vec<TerminalCommand>,
    },
    Conclusion {
        summary: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        closing: Option<String>,
    },
    #[serde(rename = "thankyou")]
    ThankYou,
}

fn default_prompt() -> String {
    "user@host:~$".to_string()
}

/// Body of a `content` slide; exactly one block kind per slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentBody {
    Points(Vec<String>),
    Objectives(Vec<IconText>),
    Concepts(Vec<Concept>),
    Features(Vec<IconText>),
    Requirements(Vec<String>),
    Steps(Vec<String>),
    Specs(Vec<Spec>),
    Advantages(Vec<IconText>),
    Limitations(Vec<IconText>),
}

/// Body of a `diagram` slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramBody {
    /// Side-by-side comparison cards
    Cards(Vec<ComparisonCard>),
    /// Layers drawn top to bottom, joined by arrows
    Layers(Vec<StackLayer>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconText {
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub term: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCard {
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackLayer {
    pub label: String,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalCommand {
    pub cmd: String,
    pub desc: String,
    #[serde(default)]
    pub output: Option<String>,
}

impl SlideBody {
    /// Template name, matching the serialized `kind` tag
    pub fn kind(&self) -> &'static str {
        match self {
            SlideBody::Cover => "cover",
            SlideBody::Toc { .. } => "toc",
            SlideBody::Content { .. } => "content",
            SlideBody::Diagram { .. } => "diagram",
            SlideBody::Table { .. } => "table",
            SlideBody::Terminal { .. } => "terminal",
            SlideBody::Conclusion { .. } => "conclusion",
            SlideBody::ThankYou => "thankyou",
        }
    }
}

/// An ordered, immutable sequence of slides.
///
/// Construction does not validate; catalog loaders are expected to check ids
/// and emptiness before handing a deck to the navigation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title shown in the overview header
    #[serde(default)]
    pub title: String,

    slides: Vec<SlideRecord>,
}

impl Deck {
    /// Create a deck from an ordered list of slides
    pub fn new(title: impl Into<String>, slides: Vec<SlideRecord>) -> Self {
        Self {
            title: title.into(),
            slides,
        }
    }

    /// Number of slides (`N`)
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a 0-based position
    pub fn get(&self, index: usize) -> Option<&SlideRecord> {
        self.slides.get(index)
    }

    /// Iterate slides in deck order
    pub fn iter(&self) -> impl Iterator<Item = &SlideRecord> {
        self.slides.iter()
    }

    /// Position of the slide with the given id
    pub fn position_of(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: SlideId, body: SlideBody) -> SlideRecord {
        SlideRecord {
            id,
            title: format!("Slide {}", id),
            subtitle: None,
            glyph: None,
            authors: Vec::new(),
            body,
        }
    }

    #[test]
    fn test_body_kind_matches_tag() {
        let slide = record(1, SlideBody::Toc { items: vec!["Intro".to_string()] });
        let json = serde_json::to_value(&slide).unwrap();
        assert_eq!(json["body"]["kind"], "toc");
        assert_eq!(slide.body.kind(), "toc");

        let thanks = record(2, SlideBody::ThankYou);
        let json = serde_json::to_value(&thanks).unwrap();
        assert_eq!(json["body"]["kind"], "thankyou");
    }

    #[test]
    fn test_content_body_parses_single_block() {
        let json = r#"{
            "id": 3,
            "title": "Introduction",
            "body": { "kind": "content", "body": { "points": ["a", "b"] } }
        }"#;
        let slide: SlideRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            slide.body,
            SlideBody::Content {
                body: ContentBody::Points(vec!["a".to_string(), "b".to_string()])
            }
        );
        assert!(slide.authors.is_empty());
    }

    #[test]
    fn test_deck_lookup() {
        let deck = Deck::new(
            "Test",
            vec![record(10, SlideBody::Cover), record(20, SlideBody::ThankYou)],
        );
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.position_of(20), Some(1));
        assert_eq!(deck.position_of(30), None);
        assert_eq!(deck.get(0).map(|s| s.id), Some(10));
    }
}
