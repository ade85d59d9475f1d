//! Nested groups of supplementary explanation attached to a diagnostic.

use crate::message::MessageUnit;
use serde::{Deserialize, Serialize};

/// Indentation added per nesting level of an [`ExtraTree`].
pub const EXTRA_INDENT: u32 = 2;

/// A forest of explanation groups.
pub type ExtraTree = Vec<ExtraGroup>;

/// One group of supplementary messages, optionally with nested groups.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ExtraGroup {
    /// The messages of this group.
    #[serde(default)]
    pub message: Vec<MessageUnit>,
    /// Nested groups, rendered after this group's messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<ExtraTree>,
}

impl ExtraGroup {
    /// Creates a group with no children.
    pub fn new(message: Vec<MessageUnit>) -> Self {
        Self {
            message,
            children: None,
        }
    }

    /// Sets the nested groups of this group.
    pub fn with_children(mut self, children: ExtraTree) -> Self {
        self.children = Some(children);
        self
    }
}

/// Flattens `tree` in pre-order, shifting every unit right by `indent`.
///
/// Children are flattened with `indent + EXTRA_INDENT`, so a unit nested `n`
/// levels deep ends up `n * EXTRA_INDENT` columns past its own indent when
/// called with `EXTRA_INDENT`.
pub fn flatten_extra(tree: &[ExtraGroup], indent: u32) -> Vec<MessageUnit> {
    tree.iter()
        .flat_map(|group| {
            let own = group.message.iter().map(move |unit| unit.indented_by(indent));
            let nested = group
                .children
                .as_deref()
                .map(|children| flatten_extra(children, indent + EXTRA_INDENT))
                .unwrap_or_default();
            own.chain(nested)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts_and_indents(units: &[MessageUnit]) -> Vec<(&str, Option<u32>)> {
        units.iter().map(|u| (u.text.as_str(), u.indent)).collect()
    }

    #[test]
    fn flatten_is_pre_order() {
        let tree = vec![
            ExtraGroup::new(vec![MessageUnit::comment("a")]).with_children(vec![
                ExtraGroup::new(vec![MessageUnit::comment("a.1")]),
                ExtraGroup::new(vec![MessageUnit::comment("a.2")]),
            ]),
            ExtraGroup::new(vec![MessageUnit::comment("b")]),
        ];
        let flat = flatten_extra(&tree, EXTRA_INDENT);
        assert_eq!(
            texts_and_indents(&flat),
            vec![
                ("a", Some(2)),
                ("a.1", Some(4)),
                ("a.2", Some(4)),
                ("b", Some(2)),
            ]
        );
    }

    #[test]
    fn indent_accumulates_on_existing_indent() {
        let deeper = ExtraGroup::new(vec![MessageUnit::comment("deeper")]);
        let deep = ExtraGroup::new(vec![MessageUnit::comment("deep").with_indent(3)])
            .with_children(vec![deeper]);
        let tree = vec![ExtraGroup::new(vec![]).with_children(vec![deep])];
        let flat = flatten_extra(&tree, EXTRA_INDENT);
        assert_eq!(
            texts_and_indents(&flat),
            vec![("deep", Some(7)), ("deeper", Some(6))]
        );
    }

    #[test]
    fn empty_tree_flattens_to_nothing() {
        assert!(flatten_extra(&[], EXTRA_INDENT).is_empty());
    }

    #[test]
    fn deserialize_without_children() {
        let json = r#"[{"message": [{"descr": "See also", "type": "Comment"}]}]"#;
        let tree: ExtraTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_none());
    }
}
