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

//! The schema walk shared by all decoders.
//!
//! The walk validates a JSON object against a [Schema] and returns a normalized
//! copy: only the properties named in the schema, `null` values removed,
//! integral numbers in `Int` fields converted to integers, and numbers in
//! `NumericString` fields converted to strings. The normalized copy always
//! deserializes into the corresponding model.

use super::schema::json_type;
use super::{DecodeError, Field, Kind, Schema, timestamp};
use serde_json::{Map, Number, Value};

pub(crate) fn object(
    schema: &'static Schema,
    input: &Map<String, Value>,
) -> Result<Map<String, Value>, DecodeError> {
    let mut output = Map::new();
    for field in schema.fields {
        match input.get(field.key) {
            None | Some(Value::Null) if field.required => {
                return Err(DecodeError::MissingRequiredField {
                    type_name: schema.name,
                    field: field.key,
                });
            }
            None | Some(Value::Null) => {}
            Some(value) => {
                let value = self::value(schema, field, value)?;
                output.insert(field.key.to_string(), value);
            }
        }
    }
    Ok(output)
}

pub(crate) fn list(schema: &'static Schema, input: &[Value]) -> Result<Vec<Value>, DecodeError> {
    input
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(m) => object(schema, m)
                .map(Value::Object)
                .map_err(|e| e.in_element(schema.name, index)),
            other => Err(DecodeError::ElementTypeMismatch {
                type_name: schema.name,
                index,
                found: json_type(other),
            }),
        })
        .collect()
}

pub(crate) fn locale_map(
    schema: &'static Schema,
    input: &Map<String, Value>,
) -> Result<Map<String, Value>, DecodeError> {
    let mut output = Map::new();
    for (key, value) in input {
        match value {
            Value::Null => {}
            Value::Object(m) => {
                let decoded = object(schema, m).map_err(|e| e.in_property(key.clone()))?;
                output.insert(key.clone(), Value::Object(decoded));
            }
            other => {
                return Err(DecodeError::FieldTypeMismatch {
                    type_name: None,
                    field: key.clone(),
                    expected: super::Expected::Object(schema.name),
                    found: json_type(other),
                });
            }
        }
    }
    Ok(output)
}

fn value(schema: &'static Schema, field: &Field, value: &Value) -> Result<Value, DecodeError> {
    let mismatch = || DecodeError::FieldTypeMismatch {
        type_name: Some(schema.name),
        field: field.key.to_string(),
        expected: field.kind.expected(),
        found: json_type(value),
    };
    match (field.kind, value) {
        (Kind::String, Value::String(_)) => Ok(value.clone()),
        (Kind::Bool, Value::Bool(_)) => Ok(value.clone()),
        (Kind::Int, Value::Number(n)) => integer(n).map(Value::from).ok_or_else(mismatch),
        (Kind::Float, Value::Number(_)) => Ok(value.clone()),
        (Kind::NumericString, Value::String(_)) => Ok(value.clone()),
        (Kind::NumericString, Value::Number(n)) => Ok(Value::String(n.to_string())),
        (Kind::Timestamp, Value::String(s)) if timestamp::parse(s).is_ok() => Ok(value.clone()),
        (Kind::StringList, Value::Array(items)) if items.iter().all(Value::is_string) => {
            Ok(value.clone())
        }
        (Kind::Any, _) => Ok(value.clone()),
        (Kind::AnyList, Value::Array(_)) => Ok(value.clone()),
        (Kind::Object(nested), Value::Object(m)) => object(nested, m)
            .map(Value::Object)
            .map_err(|e| e.in_field(schema.name, field.key)),
        (Kind::ObjectList(nested), Value::Array(items)) => list(nested, items)
            .map(Value::Array)
            .map_err(|e| e.in_field(schema.name, field.key)),
        (Kind::LocaleMap(nested), Value::Object(m)) => locale_map(nested, m)
            .map(Value::Object)
            .map_err(|e| e.in_field(schema.name, field.key)),
        _ => Err(mismatch()),
    }
}

fn integer(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // Some services send integers as floating point numbers, e.g. `5.0`.
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
