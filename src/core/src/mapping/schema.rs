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

/// The declarative description of one JSON object type.
///
/// Each model type publishes a `static` schema listing every JSON property it
/// understands. The decoder walks the schema, not the input, so unknown
/// properties in the input are ignored.
///
/// # Example
/// ```
/// use platform_services_core::mapping::{Field, Kind, Schema};
/// static PROVIDER: Schema = Schema {
///     name: "Provider",
///     fields: &[
///         Field::required("email", Kind::String),
///         Field::required("name", Kind::String),
///         Field::optional("phone", Kind::String),
///     ],
/// };
/// assert_eq!(PROVIDER.required_fields().count(), 2);
/// ```
#[derive(Debug)]
pub struct Schema {
    /// The type name, used in error messages.
    pub name: &'static str,
    /// The fields, in declaration order.
    pub fields: &'static [Field],
}

impl Schema {
    /// Finds a field by its JSON key.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// The fields that must be present in every instance.
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// One property in a [Schema].
#[derive(Debug)]
pub struct Field {
    /// The JSON property name.
    ///
    /// Some schemas use placeholder names, such as `_key_`, exactly as the
    /// service defines them.
    pub key: &'static str,
    /// The expected shape of the property value.
    pub kind: Kind,
    /// If true, decoding fails when the property is absent or `null`.
    pub required: bool,
}

impl Field {
    pub const fn required(key: &'static str, kind: Kind) -> Self {
        Self {
            key,
            kind,
            required: true,
        }
    }

    pub const fn optional(key: &'static str, kind: Kind) -> Self {
        Self {
            key,
            kind,
            required: false,
        }
    }
}

/// The shape of a [Field] value.
#[derive(Clone, Copy, Debug)]
pub enum Kind {
    String,
    Bool,
    /// A signed 64-bit integer. Numbers with a zero fractional part are
    /// accepted.
    Int,
    Float,
    /// A string. Numbers are also accepted, and kept as their decimal text.
    NumericString,
    /// An RFC 3339 timestamp. Timestamps without a UTC offset are accepted and
    /// interpreted as UTC.
    Timestamp,
    StringList,
    /// Any JSON value, copied through verbatim.
    Any,
    /// A JSON array of arbitrary values.
    AnyList,
    /// A nested object.
    Object(&'static Schema),
    /// An array of nested objects.
    ObjectList(&'static Schema),
    /// An object whose keys are not fixed by the schema, such as locale codes,
    /// and whose values all share one nested schema.
    LocaleMap(&'static Schema),
}

impl Kind {
    /// Describes the expected shape in error messages.
    pub fn expected(&self) -> Expected {
        match self {
            Kind::String => Expected::String,
            Kind::Bool => Expected::Bool,
            Kind::Int => Expected::Integer,
            Kind::Float => Expected::Number,
            Kind::NumericString => Expected::NumericString,
            Kind::Timestamp => Expected::Timestamp,
            Kind::StringList => Expected::StringList,
            Kind::Any => Expected::Any,
            Kind::AnyList => Expected::List,
            Kind::Object(s) => Expected::Object(s.name),
            Kind::ObjectList(s) => Expected::ObjectList(s.name),
            Kind::LocaleMap(s) => Expected::LocaleMap(s.name),
        }
    }
}

/// The JSON shape a decoder expected to find.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    String,
    Bool,
    Integer,
    Number,
    NumericString,
    Timestamp,
    StringList,
    Any,
    List,
    Object(&'static str),
    ObjectList(&'static str),
    LocaleMap(&'static str),
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "a string"),
            Self::Bool => write!(f, "a boolean"),
            Self::Integer => write!(f, "an integer"),
            Self::Number => write!(f, "a number"),
            Self::NumericString => write!(f, "a string or a number"),
            Self::Timestamp => write!(f, "an RFC 3339 timestamp"),
            Self::StringList => write!(f, "a list of strings"),
            Self::Any => write!(f, "any value"),
            Self::List => write!(f, "a list"),
            Self::Object(name) => write!(f, "an object containing an instance of `{name}`"),
            Self::ObjectList(name) => write!(f, "a list of `{name}` objects"),
            Self::LocaleMap(name) => write!(f, "an object mapping keys to `{name}` objects"),
        }
    }
}

/// Names the shape of a JSON value in error messages.
pub fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    static INNER: Schema = Schema {
        name: "Inner",
        fields: &[Field::required("a", Kind::String)],
    };

    static OUTER: Schema = Schema {
        name: "Outer",
        fields: &[
            Field::required("inner", Kind::Object(&INNER)),
            Field::optional("list", Kind::ObjectList(&INNER)),
            Field::optional("count", Kind::Int),
        ],
    };

    #[test]
    fn lookup() {
        assert!(OUTER.field("inner").is_some());
        assert!(OUTER.field("missing").is_none());
        let required = OUTER.required_fields().map(|f| f.key).collect::<Vec<_>>();
        assert_eq!(required, vec!["inner"]);
    }

    #[test]
    fn expected() {
        let got = OUTER.field("list").map(|f| f.kind.expected());
        assert_eq!(got, Some(Expected::ObjectList("Inner")));
        assert_eq!(
            Expected::Object("Inner").to_string(),
            "an object containing an instance of `Inner`"
        );
    }

    #[test_case(json!(null), "null")]
    #[test_case(json!(true), "boolean")]
    #[test_case(json!(1.5), "number")]
    #[test_case(json!("x"), "string")]
    #[test_case(json!([]), "array")]
    #[test_case(json!({}), "object")]
    fn names(input: serde_json::Value, want: &str) {
        assert_eq!(json_type(&input), want);
    }
}
