//! Message units, the atomic pieces of text a diagnostic is built from.

use serde::{Deserialize, Serialize};
use typesift_source::SourceLocation;

/// Whether a message unit points at source code or is free text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UnitType {
    /// A unit blamed on a source location. Never merged into a neighbour.
    #[serde(rename = "Blame", alias = "Anchored")]
    Anchored,
    /// Free text with no location, folded into the preceding anchored unit.
    Comment,
}

/// One piece of explanatory text, optionally anchored to a source location.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct MessageUnit {
    /// The message text.
    #[serde(rename = "descr")]
    pub text: String,
    /// Anchored or comment.
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    /// The raw text of the source line the location starts on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Where in the source this unit points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
    /// Number of spaces to indent the rendered unit by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,
}

impl MessageUnit {
    /// Creates an anchored unit at `loc`.
    pub fn anchored(text: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            text: text.into(),
            unit_type: UnitType::Anchored,
            context: None,
            loc: Some(loc),
            indent: None,
        }
    }

    /// Creates a location-less comment unit.
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            unit_type: UnitType::Comment,
            context: None,
            loc: None,
            indent: None,
        }
    }

    /// Attaches the source line the location starts on.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Sets the indentation of this unit.
    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Returns the indentation, treating an absent indent as `0`.
    pub fn indent_width(&self) -> u32 {
        self.indent.unwrap_or(0)
    }

    /// Returns a copy of this unit indented `delta` columns further.
    pub fn indented_by(&self, delta: u32) -> Self {
        Self {
            indent: Some(self.indent_width() + delta),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typesift_source::Position;

    #[test]
    fn indented_by_is_additive() {
        let unit = MessageUnit::comment("x");
        assert_eq!(unit.indented_by(2).indent, Some(2));
        assert_eq!(unit.with_indent(4).indented_by(2).indent, Some(6));
    }

    #[test]
    fn indented_by_leaves_original_untouched() {
        let unit = MessageUnit::comment("x").with_indent(1);
        let shifted = unit.indented_by(2);
        assert_eq!(unit.indent, Some(1));
        assert_eq!(shifted.indent, Some(3));
        assert_eq!(shifted.text, unit.text);
    }

    #[test]
    fn deserialize_blame_unit() {
        let json = r#"{
            "descr": "string",
            "type": "Blame",
            "context": "const x: number = 'a';",
            "loc": {
                "source": "src/x.js",
                "type": "SourceFile",
                "start": {"line": 1, "column": 19, "offset": 18},
                "end": {"line": 1, "column": 21, "offset": 21}
            }
        }"#;
        let unit: MessageUnit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.text, "string");
        assert_eq!(unit.unit_type, UnitType::Anchored);
        assert_eq!(unit.loc.unwrap().start, Position::new(1, 19, 18));
        assert!(unit.indent.is_none());
    }

    #[test]
    fn deserialize_comment_with_null_fields() {
        let json = r#"{"descr": "This type is incompatible with", "type": "Comment",
                       "context": null, "loc": null}"#;
        let unit: MessageUnit = serde_json::from_str(json).unwrap();
        assert_eq!(unit, MessageUnit::comment("This type is incompatible with"));
    }

    #[test]
    fn serialize_omits_absent_fields() {
        let json = serde_json::to_string(&MessageUnit::comment("hi")).unwrap();
        assert_eq!(json, r#"{"descr":"hi","type":"Comment"}"#);
    }
}
