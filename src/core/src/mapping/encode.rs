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

use super::schema::json_type;
use super::{EncodeError, Schema};
use serde::Serialize;
use serde_json::{Map, Value};

pub(crate) fn object<T>(
    schema: &'static Schema,
    value: &T,
) -> Result<Map<String, Value>, EncodeError>
where
    T: Serialize,
{
    let value = serde_json::to_value(value).map_err(|source| EncodeError::Serialization {
        type_name: schema.name,
        source,
    })?;
    let Value::Object(map) = value else {
        return Err(EncodeError::NotAnObject {
            type_name: schema.name,
            found: json_type(&value),
        });
    };
    if let Some(field) = schema
        .required_fields()
        .find(|f| map.get(f.key).is_none_or(Value::is_null))
    {
        return Err(EncodeError::MissingRequiredField {
            type_name: schema.name,
            field: field.key,
        });
    }
    Ok(map)
}

/// Builds a JSON object one property at a time.
///
/// Request bodies are assembled from the fields of an options struct, which is
/// not itself a model. Absent optional values are omitted from the output.
///
/// # Example
/// ```
/// # use platform_services_core::mapping::ObjectEncoder;
/// # fn sample() -> Result<(), platform_services_core::mapping::EncodeError> {
/// let kind: Option<String> = None;
/// let body = ObjectEncoder::new("CreateRequest")
///     .field("name", &"my-entry")?
///     .optional("kind", &kind)?
///     .finish();
/// assert_eq!(body.len(), 1);
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct ObjectEncoder {
    type_name: &'static str,
    map: Map<String, Value>,
}

impl ObjectEncoder {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            map: Map::new(),
        }
    }

    /// Adds a property, even if it serializes as `null`.
    pub fn field<T>(mut self, key: &str, value: &T) -> Result<Self, EncodeError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(|source| EncodeError::Serialization {
            type_name: self.type_name,
            source,
        })?;
        self.map.insert(key.to_string(), value);
        Ok(self)
    }

    /// Adds a property if the value is present.
    pub fn optional<T>(self, key: &str, value: &Option<T>) -> Result<Self, EncodeError>
    where
        T: Serialize,
    {
        match value {
            None => Ok(self),
            Some(v) => self.field(key, v),
        }
    }

    pub fn finish(self) -> Map<String, Value> {
        self.map
    }
}
