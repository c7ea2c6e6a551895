//! Schema descriptors for task records.
//!
//! A schema lists each canonical field, the container type it must have, and
//! the historical key names it has gone by. The alias list on a field is the
//! single place where renamed keys (`achievements` vs `bullets` vs
//! `accomplishments`) are reconciled.

use serde_json::{Map, Value};

#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

#[derive(Debug)]
pub struct Field {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: FieldKind,
    /// Plain-text section headings the field may appear under when the model
    /// ignores the JSON instruction (e.g. "Work Experience").
    pub headings: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Number,
    TextList,
    Object(&'static Schema),
    Records {
        entry: &'static Schema,
        layout: Option<EntryLayout>,
    },
}

/// Where line heuristics put the parts of a plain-text entry such as
/// `Senior Engineer at Acme Corp (2019 - 2022)` followed by bullet lines.
#[derive(Debug, Clone, Copy)]
pub struct EntryLayout {
    /// Organization-like part: the text after " at ", or the first segment.
    pub primary: &'static str,
    /// Role-like part: the text before " at ", or the second segment.
    pub secondary: &'static str,
    pub dates: &'static str,
    /// Receives bullet lines.
    pub items: &'static str,
}

impl Field {
    const fn of(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            aliases: &[],
            kind,
            headings: &[],
        }
    }

    pub const fn text(key: &'static str) -> Self {
        Self::of(key, FieldKind::Text)
    }

    pub const fn number(key: &'static str) -> Self {
        Self::of(key, FieldKind::Number)
    }

    pub const fn text_list(key: &'static str) -> Self {
        Self::of(key, FieldKind::TextList)
    }

    pub const fn object(key: &'static str, schema: &'static Schema) -> Self {
        Self::of(key, FieldKind::Object(schema))
    }

    pub const fn records(
        key: &'static str,
        entry: &'static Schema,
        layout: Option<EntryLayout>,
    ) -> Self {
        Self::of(key, FieldKind::Records { entry, layout })
    }

    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub const fn headings(mut self, headings: &'static [&'static str]) -> Self {
        self.headings = headings;
        self
    }

    /// Canonical key first, then aliases in declared order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.key).chain(self.aliases.iter().copied())
    }

    /// Looks the field up in `object`, preferring the canonical key.
    pub fn resolve<'a>(&self, object: &'a Map<String, Value>) -> Option<&'a Value> {
        self.names().find_map(|name| object.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field<'a>(schema: &'a Schema, key: &str) -> &'a Field {
        schema.fields.iter().find(|f| f.key == key).unwrap()
    }

    static ENTRY: Schema = Schema {
        name: "entry",
        fields: &[
            Field::text("title").aliases(&["role", "position"]),
            Field::text_list("accomplishments").aliases(&["achievements", "bullets"]),
        ],
    };

    static TOP: Schema = Schema {
        name: "top",
        fields: &[
            Field::text("summary").aliases(&["Summary"]).headings(&["summary"]),
            Field::records("work_experience", &ENTRY, None),
        ],
    };

    #[test]
    fn test_resolve_prefers_canonical_key() {
        let object = json!({"role": "alias", "title": "canonical"});
        let field = field(&ENTRY, "title");
        assert_eq!(field.resolve(object.as_object().unwrap()), Some(&json!("canonical")));
    }

    #[test]
    fn test_resolve_falls_back_through_aliases_in_order() {
        let object = json!({"bullets": ["b"], "achievements": ["a"]});
        let field = field(&ENTRY, "accomplishments");
        assert_eq!(field.resolve(object.as_object().unwrap()), Some(&json!(["a"])));
    }

    #[test]
    fn test_resolve_missing_field() {
        let object = json!({"other": 1});
        assert!(field(&ENTRY, "title").resolve(object.as_object().unwrap()).is_none());
    }

    #[test]
    fn test_names_lists_key_then_aliases() {
        let names: Vec<_> = field(&ENTRY, "title").names().collect();
        assert_eq!(names, vec!["title", "role", "position"]);
    }

    #[test]
    fn test_nested_schema_reference() {
        match field(&TOP, "work_experience").kind {
            FieldKind::Records { entry, .. } => assert_eq!(entry.name, "entry"),
            other => panic!("unexpected kind {other:?}"),
        }
        assert_eq!(field(&TOP, "summary").headings, &["summary"]);
    }
}
