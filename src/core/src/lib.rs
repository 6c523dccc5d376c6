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

//! Platform Services SDK helpers.
//!
//! This crate contains the types and functions shared by the Platform Services
//! client libraries for Rust: the error type returned by every client, the
//! response wrapper, per-request options, the client builder, the HTTP
//! transport, and the schema-driven JSON [mapping] layer used to convert
//! service payloads into typed models.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping REST calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Builders and configuration shared by all clients.
pub mod client_builder;

/// The HTTP transport used by generated clients.
pub mod http;

pub mod mapping;

/// Tracing spans emitted by the clients.
#[doc(hidden)]
pub mod observability;

pub mod options;
pub mod response;
