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

//! Serialize and deserialize timestamps.
//!
//! The services format timestamps as RFC 3339 strings. Some older entries omit
//! the UTC offset (e.g. `2019-01-01T12:00:00`), those are interpreted as UTC.
//! Use this module with `#[serde(with = ...)]` for `Option<OffsetDateTime>`
//! fields.

use serde::{Deserialize, Deserializer, Serializer};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Parses a timestamp, accepting values without a UTC offset.
pub fn parse(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(value, &Rfc3339).or_else(|e| {
        PrimitiveDateTime::parse(value, &Iso8601::DEFAULT)
            .map(PrimitiveDateTime::assume_utc)
            .map_err(|_| e)
    })
}

pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::Error as _;
    match value {
        Some(v) => {
            let formatted = v.format(&Rfc3339).map_err(S::Error::custom)?;
            serializer.serialize_some(&formatted)
        }
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    Option::<String>::deserialize(deserializer)?
        .map(|s| parse(&s).map_err(D::Error::custom))
        .transpose()
}
