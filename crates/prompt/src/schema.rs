//! Description of the student collection as the model sees it.

use serde::{Deserialize, Serialize};

/// Value type of a collection field, as described to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    /// Calendar date stored as `YYYY-MM-DD`
    Date,
}

impl FieldKind {
    /// Type label used in prompt field listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Date => "date in YYYY-MM-DD format",
        }
    }
}

/// One field of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub description: String,
}

impl FieldSpec {
    fn new(name: &str, kind: FieldKind, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            description: description.to_string(),
        }
    }
}

/// A named collection and its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl CollectionSchema {
    /// The student records collection, stored under `collection`.
    pub fn students(collection: impl Into<String>) -> Self {
        Self {
            name: collection.into(),
            fields: vec![
                FieldSpec::new("name", FieldKind::String, "Student's full name"),
                FieldSpec::new("roll_no", FieldKind::Number, "Unique student roll number"),
                FieldSpec::new("email", FieldKind::String, "Student's email address"),
                FieldSpec::new("phone_no", FieldKind::Number, "Contact phone number"),
                FieldSpec::new("address", FieldKind::String, "Student's address"),
                FieldSpec::new("dob", FieldKind::Date, "Date of birth"),
                FieldSpec::new("class", FieldKind::String, "Student's class or grade"),
                FieldSpec::new(
                    "status",
                    FieldKind::String,
                    "Student status (active, inactive, graduated, ...)",
                ),
            ],
        }
    }

    /// Whether `name` is a field of this collection.
    ///
    /// `_id` is always accepted; dotted paths are checked by their first segment.
    pub fn has_field(&self, name: &str) -> bool {
        let root = name.split('.').next().unwrap_or(name);
        root == "_id" || self.fields.iter().any(|f| f.name == root)
    }

    /// `- name (type)` lines, one per field.
    pub fn field_lines(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("- {} ({})", f.name, f.kind.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `- name (type): description` lines, one per field.
    pub fn described_field_lines(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("- {} ({}): {}", f.name, f.kind.label(), f.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_fields_in_order() {
        let schema = CollectionSchema::students("students");
        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["name", "roll_no", "email", "phone_no", "address", "dob", "class", "status"]
        );
    }

    #[test]
    fn test_field_lines() {
        let schema = CollectionSchema::students("students");
        let lines = schema.field_lines();
        assert!(lines.starts_with("- name (string)\n- roll_no (number)"));
        assert!(lines.contains("- dob (date in YYYY-MM-DD format)"));
        assert!(lines.ends_with("- status (string)"));
    }

    #[test]
    fn test_has_field() {
        let schema = CollectionSchema::students("students");
        assert!(schema.has_field("status"));
        assert!(schema.has_field("_id"));
        assert!(schema.has_field("address.city"));
        assert!(!schema.has_field("password"));
    }
}
