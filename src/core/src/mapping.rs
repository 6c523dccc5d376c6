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

//! Schema-driven conversion between JSON payloads and typed models.
//!
//! Every model type implements [Model], which ties the type to a `static`
//! [Schema]. Decoding first walks the payload against the schema, reporting
//! missing required properties and type mismatches with their full location,
//! and only then builds the model. Unknown properties are ignored and `null`
//! is treated as absent.
//!
//! # Example
//! ```
//! # use platform_services_core::mapping::*;
//! #[derive(Debug, serde::Deserialize, serde::Serialize)]
//! struct Amount {
//!     country: String,
//!     currency: Option<String>,
//! }
//!
//! static AMOUNT: Schema = Schema {
//!     name: "Amount",
//!     fields: &[
//!         Field::required("country", Kind::String),
//!         Field::optional("currency", Kind::String),
//!     ],
//! };
//!
//! impl Model for Amount {
//!     fn schema() -> &'static Schema {
//!         &AMOUNT
//!     }
//! }
//!
//! let payload = serde_json::json!({"country": "USA", "extra": 1});
//! let serde_json::Value::Object(map) = payload else { unreachable!() };
//! let amount = decode::<Amount>(&map)?;
//! assert_eq!(amount.country, "USA");
//! # Ok::<(), DecodeError>(())
//! ```

mod encode;
mod error;
mod schema;
pub mod timestamp;
mod walk;

pub use encode::ObjectEncoder;
pub use error::{DecodeError, DecodeErrorKind, EncodeError};
pub use schema::{Expected, Field, Kind, Schema, json_type};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A type that can be decoded from, and encoded into, a JSON object.
pub trait Model: Serialize + DeserializeOwned {
    /// The schema describing the JSON representation of this type.
    fn schema() -> &'static Schema;
}

/// Decodes a model from a JSON object.
pub fn decode<T>(input: &Map<String, Value>) -> Result<T, DecodeError>
where
    T: Model,
{
    let schema = T::schema();
    let normalized = walk::object(schema, input)?;
    materialize(schema, Value::Object(normalized))
}

/// Decodes a list of models.
///
/// Fails if any element fails, the error includes the position of the first
/// bad element. An empty input produces an empty list.
pub fn decode_list<T>(input: &[Value]) -> Result<Vec<T>, DecodeError>
where
    T: Model,
{
    let schema = T::schema();
    walk::list(schema, input)?
        .into_iter()
        .map(|v| materialize(schema, v))
        .collect()
}

/// Decodes the model stored in the `key` property of a JSON object.
///
/// Returns `None` if the property is absent or `null`.
pub fn decode_property<T>(input: &Map<String, Value>, key: &str) -> Result<Option<T>, DecodeError>
where
    T: Model,
{
    match input.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(m)) => decode(m).map(Some).map_err(|e| e.in_property(key)),
        Some(other) => Err(DecodeError::FieldTypeMismatch {
            type_name: None,
            field: key.to_string(),
            expected: Expected::Object(T::schema().name),
            found: json_type(other),
        }),
    }
}

/// Decodes the list of models stored in the `key` property of a JSON object.
///
/// Returns `None` if the property is absent or `null`.
pub fn decode_list_property<T>(
    input: &Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<T>>, DecodeError>
where
    T: Model,
{
    match input.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => decode_list(items).map(Some).map_err(|e| e.in_property(key)),
        Some(other) => Err(DecodeError::FieldTypeMismatch {
            type_name: None,
            field: key.to_string(),
            expected: Expected::ObjectList(T::schema().name),
            found: json_type(other),
        }),
    }
}

/// Encodes a model as a JSON object.
///
/// Absent optional properties are omitted. Fails if a required property is
/// missing from the output.
pub fn encode<T>(value: &T) -> Result<Map<String, Value>, EncodeError>
where
    T: Model,
{
    encode::object(T::schema(), value)
}

fn materialize<T>(schema: &'static Schema, value: Value) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|source| DecodeError::Materialization {
        type_name: schema.name,
        source,
    })
}
