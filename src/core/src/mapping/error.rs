// Copyright 2025 Platform Services SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::Expected;

/// A JSON payload does not match the schema of the model being decoded.
///
/// Decoding stops at the first problem. Problems inside nested objects and
/// lists are wrapped in [NestedDecodeFailure][DecodeError::NestedDecodeFailure]
/// errors, one per level, so the full location can be recovered using
/// [path()][DecodeError::path].
///
/// # Example
/// ```
/// # use platform_services_core::mapping::{DecodeError, DecodeErrorKind};
/// fn describe(e: &DecodeError) -> String {
///     match e.root_cause().kind() {
///         DecodeErrorKind::MissingRequiredField => format!("`{}` is required", e.path()),
///         _ => format!("cannot decode `{}`: {e}", e.path()),
///     }
/// }
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// A required property is absent or `null`.
    #[error("missing required field `{field}` in `{type_name}`")]
    MissingRequiredField {
        type_name: &'static str,
        field: &'static str,
    },

    /// A property is present but its value has the wrong shape.
    #[error("field `{field}`{} should be {expected}, found {found}", in_type(.type_name))]
    FieldTypeMismatch {
        /// The enclosing type, if known.
        type_name: Option<&'static str>,
        field: String,
        expected: Expected,
        found: &'static str,
    },

    /// An element in a list of objects is not an object.
    #[error("list element {index} should be an object containing an instance of `{type_name}`, found {found}")]
    ElementTypeMismatch {
        /// The element type.
        type_name: &'static str,
        index: usize,
        found: &'static str,
    },

    /// A nested object, or an element of a list of objects, failed to decode.
    #[error("cannot decode {}: {source}", location(.type_name, .field, .index))]
    NestedDecodeFailure {
        /// The enclosing type, if known.
        type_name: Option<&'static str>,
        field: Option<String>,
        index: Option<usize>,
        source: Box<DecodeError>,
    },

    /// The payload matches the schema, but the model cannot be created from
    /// it.
    ///
    /// This indicates a schema that disagrees with the model type, and is a
    /// bug in the client library.
    #[error("cannot create `{type_name}` from a payload matching its schema: {source}")]
    Materialization {
        type_name: &'static str,
        source: serde_json::Error,
    },
}

/// The kind of a [DecodeError], without its details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    MissingRequiredField,
    FieldTypeMismatch,
    ElementTypeMismatch,
    NestedDecodeFailure,
    Materialization,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::MissingRequiredField { .. } => DecodeErrorKind::MissingRequiredField,
            Self::FieldTypeMismatch { .. } => DecodeErrorKind::FieldTypeMismatch,
            Self::ElementTypeMismatch { .. } => DecodeErrorKind::ElementTypeMismatch,
            Self::NestedDecodeFailure { .. } => DecodeErrorKind::NestedDecodeFailure,
            Self::Materialization { .. } => DecodeErrorKind::Materialization,
        }
    }

    /// The innermost error, skipping any `NestedDecodeFailure` wrappers.
    pub fn root_cause(&self) -> &DecodeError {
        let mut current = self;
        while let Self::NestedDecodeFailure { source, .. } = current {
            current = source.as_ref();
        }
        current
    }

    /// The location of the problem, relative to the decoded value.
    ///
    /// Fields are separated by `.` and list positions are written as `[n]`,
    /// for example: `metadata.pricing.starting_price.amount[0].prices`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut current = self;
        loop {
            match current {
                Self::NestedDecodeFailure {
                    field,
                    index,
                    source,
                    ..
                } => {
                    if let Some(f) = field {
                        push_field(&mut path, f);
                    }
                    if let Some(i) = index {
                        path.push_str(&format!("[{i}]"));
                    }
                    current = source.as_ref();
                }
                Self::MissingRequiredField { field, .. } => {
                    push_field(&mut path, field);
                    return path;
                }
                Self::FieldTypeMismatch { field, .. } => {
                    push_field(&mut path, field);
                    return path;
                }
                Self::ElementTypeMismatch { index, .. } => {
                    path.push_str(&format!("[{index}]"));
                    return path;
                }
                Self::Materialization { .. } => return path,
            }
        }
    }

    pub(crate) fn in_field(self, type_name: &'static str, field: impl Into<String>) -> Self {
        Self::NestedDecodeFailure {
            type_name: Some(type_name),
            field: Some(field.into()),
            index: None,
            source: Box::new(self),
        }
    }

    pub(crate) fn in_property(self, field: impl Into<String>) -> Self {
        Self::NestedDecodeFailure {
            type_name: None,
            field: Some(field.into()),
            index: None,
            source: Box::new(self),
        }
    }

    pub(crate) fn in_element(self, type_name: &'static str, index: usize) -> Self {
        Self::NestedDecodeFailure {
            type_name: Some(type_name),
            field: None,
            index: Some(index),
            source: Box::new(self),
        }
    }
}

fn push_field(path: &mut String, field: &str) {
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(field);
}

fn in_type(type_name: &Option<&'static str>) -> String {
    type_name
        .map(|t| format!(" of `{t}`"))
        .unwrap_or_default()
}

fn location(
    type_name: &Option<&'static str>,
    field: &Option<String>,
    index: &Option<usize>,
) -> String {
    match (type_name, field, index) {
        (Some(t), Some(f), _) => format!("field `{f}` of `{t}`"),
        (None, Some(f), _) => format!("property `{f}`"),
        (Some(t), None, Some(i)) => format!("list element {i} of type `{t}`"),
        (None, None, Some(i)) => format!("list element {i}"),
        (_, None, None) => "nested value".to_string(),
    }
}

/// A model cannot be converted into a JSON object.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum EncodeError {
    /// The value cannot be represented as JSON.
    #[error("cannot encode `{type_name}`: {source}")]
    Serialization {
        type_name: &'static str,
        source: serde_json::Error,
    },

    /// The value does not serialize as a JSON object.
    #[error("`{type_name}` must encode as a JSON object, found {found}")]
    NotAnObject {
        type_name: &'static str,
        found: &'static str,
    },

    /// A required property is absent after encoding.
    #[error("missing required field `{field}` in `{type_name}`")]
    MissingRequiredField {
        type_name: &'static str,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn mismatch() -> DecodeError {
        DecodeError::FieldTypeMismatch {
            type_name: Some("Price"),
            field: "Price".to_string(),
            expected: Expected::Number,
            found: "string",
        }
    }

    #[test]
    fn path_and_root_cause() {
        let error = mismatch()
            .in_element("Price", 1)
            .in_field("Amount", "prices")
            .in_element("Amount", 0)
            .in_field("StartingPrice", "amount")
            .in_field("PricingGet", "starting_price");
        assert_eq!(error.kind(), DecodeErrorKind::NestedDecodeFailure);
        assert_eq!(error.path(), "starting_price.amount[0].prices[1].Price");
        assert_eq!(
            error.root_cause().kind(),
            DecodeErrorKind::FieldTypeMismatch
        );
        assert!(error.source().is_some(), "{error:?}");
    }

    #[test]
    fn display() {
        let error = DecodeError::MissingRequiredField {
            type_name: "CatalogEntry",
            field: "provider",
        };
        assert_eq!(
            error.to_string(),
            "missing required field `provider` in `CatalogEntry`"
        );
        assert_eq!(error.path(), "provider");

        let error = mismatch();
        assert_eq!(
            error.to_string(),
            "field `Price` of `Price` should be a number, found string"
        );

        let error = mismatch().in_field("Amount", "prices");
        let msg = error.to_string();
        assert!(msg.starts_with("cannot decode field `prices` of `Amount`: "), "{msg}");

        let error = mismatch().in_property("pricing");
        let msg = error.to_string();
        assert!(msg.starts_with("cannot decode property `pricing`: "), "{msg}");

        let error = DecodeError::ElementTypeMismatch {
            type_name: "Artifact",
            index: 2,
            found: "string",
        };
        assert!(error.to_string().contains("list element 2"), "{error}");
        assert_eq!(error.path(), "[2]");
    }

    #[test]
    fn property_type_mismatch() {
        let error = DecodeError::FieldTypeMismatch {
            type_name: None,
            field: "pricing".to_string(),
            expected: Expected::Object("PricingSet"),
            found: "array",
        };
        assert_eq!(
            error.to_string(),
            "field `pricing` should be an object containing an instance of `PricingSet`, found array"
        );
    }
}
