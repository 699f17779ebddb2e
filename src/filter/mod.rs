// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Declarative filter predicates for server-side (paginated) queries.
//!
//! A [`FilterGroup`] is an ordered list of [`FilterField`] predicates that the
//! backing query service combines with logical AND. Groups themselves are
//! independent; callers collect them into a request and the combination
//! semantics across groups belong to the query layer, not to this module.
//!
//! Field paths are modeled as typed segment sequences rather than interpolated
//! strings so that label keys containing dots (`provider.cattle.io`) render
//! correctly quoted instead of being split by the query layer's path parser.

use std::fmt;

use serde::{Serialize, Serializer};

/// One segment of a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Bare key, joined with dots: `spec`, `internal`.
    Key(String),
    /// Literal key rendered double-quoted, for keys that themselves contain
    /// dots or other separator characters: `"provider.cattle.io"`.
    Literal(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{key}"),
            PathSegment::Literal(key) => write!(f, "\"{key}\""),
        }
    }
}

/// Path expression selecting a value inside a record.
///
/// Non-empty by construction: [`FieldPath::key`] and [`FieldPath::literal`]
/// both require an initial segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Start a path with a bare key segment.
    pub fn key(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Key(segment.into())],
        }
    }

    /// Start a path with a quoted literal segment.
    pub fn literal(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Literal(segment.into())],
        }
    }

    /// Append a bare key segment.
    pub fn then(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(segment.into()));
        self
    }

    /// Append a quoted literal segment.
    pub fn then_literal(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Literal(segment.into()));
        self
    }

    /// The path's segments, in order. Never empty.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Comparison value carried by a predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    String(String),
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

/// One condition against one field of a record.
///
/// `equals` selects equality (true, the default) vs. inequality; `exact`
/// selects exact string comparison over substring matching (default false).
/// The value's type is not validated against the field here; that is the
/// consuming query layer's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterField {
    pub field: FieldPath,
    pub value: Scalar,
    pub equals: bool,
    pub exact: bool,
}

impl FilterField {
    /// New equality predicate with default comparison flags.
    pub fn new(field: FieldPath, value: impl Into<Scalar>) -> Self {
        Self {
            field,
            value: value.into(),
            equals: true,
            exact: false,
        }
    }

    /// Flip to inequality (exclude matching records).
    pub fn not_equals(mut self) -> Self {
        self.equals = false;
        self
    }

    /// Require exact string comparison instead of substring matching.
    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }
}

/// Ordered predicates combined with logical AND by the query layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterGroup {
    pub fields: Vec<FilterField>,
}

impl FilterGroup {
    /// Group the given predicates into one AND-combined filter.
    pub fn multiple_fields(fields: Vec<FilterField>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_display() {
        let path = FieldPath::key("spec").then("internal");
        assert_eq!(path.to_string(), "spec.internal");
    }

    #[test]
    fn test_field_path_literal_segment_quoted() {
        let path = FieldPath::key("metadata")
            .then("labels")
            .then_literal("provider.cattle.io");
        assert_eq!(path.to_string(), "metadata.labels.\"provider.cattle.io\"");
    }

    #[test]
    fn test_field_path_never_empty() {
        assert_eq!(FieldPath::key("status").segments().len(), 1);
        assert_eq!(FieldPath::literal("a.b").to_string(), "\"a.b\"");
    }

    #[test]
    fn test_filter_field_defaults() {
        let field = FilterField::new(FieldPath::key("spec").then("internal"), false);
        assert!(field.equals);
        assert!(!field.exact);
        assert_eq!(field.value, Scalar::Bool(false));
    }

    #[test]
    fn test_filter_field_modifiers() {
        let field = FilterField::new(FieldPath::key("status").then("provider"), "harvester")
            .not_equals()
            .exact();
        assert!(!field.equals);
        assert!(field.exact);
        assert_eq!(field.value, Scalar::String("harvester".to_string()));
    }

    #[test]
    fn test_filter_field_request_shape() {
        let field = FilterField::new(
            FieldPath::key("metadata")
                .then("labels")
                .then_literal("provider.cattle.io"),
            "harvester",
        )
        .not_equals()
        .exact();

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "metadata.labels.\"provider.cattle.io\"",
                "value": "harvester",
                "equals": false,
                "exact": true,
            })
        );
    }

    #[test]
    fn test_scalar_serializes_untagged() {
        assert_eq!(
            serde_json::to_value(Scalar::Bool(false)).unwrap(),
            serde_json::json!(false)
        );
        assert_eq!(
            serde_json::to_value(Scalar::from("x")).unwrap(),
            serde_json::json!("x")
        );
    }

    #[test]
    fn test_filter_group_preserves_order() {
        let group = FilterGroup::multiple_fields(vec![
            FilterField::new(FieldPath::key("a"), "1"),
            FilterField::new(FieldPath::key("b"), "2"),
        ]);
        assert_eq!(group.fields[0].field.to_string(), "a");
        assert_eq!(group.fields[1].field.to_string(), "b");
    }
}
