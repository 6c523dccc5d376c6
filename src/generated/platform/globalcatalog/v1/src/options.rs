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

//! The parameters of each Global Catalog operation.
//!
//! Every struct has public fields, implements [Default], and provides a
//! `new()` function receiving the required parameters. The `account` field
//! selects the account whose private catalog is used, and the `headers`
//! field adds custom headers to the request.

use crate::model::{CatalogEntryMetadata, Image, OverviewUi, Provider, VisibilityDetail};
use crate::{Error, Result};
use bytes::Bytes;
use sdk::error::validation;
use sdk::mapping::ObjectEncoder;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// The parameters for [list_catalog_entries][crate::client::GlobalCatalog::list_catalog_entries].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListCatalogEntriesOptions {
    /// The account ID. Use `global` for the public catalog.
    pub account: Option<String>,
    /// A GET call by default returns a basic set of properties. To include
    /// other properties, use this parameter, e.g. `metadata.plan` or `*`.
    pub include: Option<String>,
    /// A query filter, for example, `q=kind:iaas service_name rc:true`.
    pub q: Option<String>,
    /// The field on which the output is sorted.
    pub sort_by: Option<String>,
    /// Sort in descending order, `true` or `false`.
    pub descending: Option<String>,
    /// Return the data strings for the given languages, e.g. `en,fr`.
    pub languages: Option<String>,
    /// Returns all available fields for all languages, `true` or `false`.
    pub complete: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListCatalogEntriesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The parameters for [create_catalog_entry][crate::client::GlobalCatalog::create_catalog_entry].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateCatalogEntryOptions {
    /// The programmatic name of the new entry. Must not be empty.
    pub name: String,
    /// The type of the new entry, see [catalog_entry_kind][crate::model::catalog_entry_kind].
    pub kind: String,
    /// The user interface text, by locale.
    pub overview_ui: OverviewUi,
    pub images: Image,
    pub disabled: bool,
    pub tags: Vec<String>,
    pub provider: Provider,
    /// The catalog ID of the new entry. Must not be empty.
    pub id: String,
    pub parent_id: Option<String>,
    pub group: Option<bool>,
    pub active: Option<bool>,
    pub metadata: Option<CatalogEntryMetadata>,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl CreateCatalogEntryOptions {
    #[allow(clippy::too_many_arguments)]
    pub fn new<N, K, I>(
        name: N,
        kind: K,
        overview_ui: OverviewUi,
        images: Image,
        disabled: bool,
        tags: Vec<String>,
        provider: Provider,
        id: I,
    ) -> Self
    where
        N: Into<String>,
        K: Into<String>,
        I: Into<String>,
    {
        Self {
            name: name.into(),
            kind: kind.into(),
            overview_ui,
            images,
            disabled,
            tags,
            provider,
            id: id.into(),
            ..Default::default()
        }
    }

    pub(crate) fn body(&self) -> Result<Map<String, Value>> {
        require("name", &self.name)?;
        require("kind", &self.kind)?;
        require("id", &self.id)?;
        require_nested(&self.overview_ui, &self.images, &self.provider)?;
        let body = ObjectEncoder::new("CreateCatalogEntryOptions")
            .field("name", &self.name)
            .and_then(|e| e.field("kind", &self.kind))
            .and_then(|e| e.field("overview_ui", &self.overview_ui))
            .and_then(|e| e.field("images", &self.images))
            .and_then(|e| e.field("disabled", &self.disabled))
            .and_then(|e| e.field("tags", &self.tags))
            .and_then(|e| e.field("provider", &self.provider))
            .and_then(|e| e.field("id", &self.id))
            .and_then(|e| e.optional("parent_id", &self.parent_id))
            .and_then(|e| e.optional("group", &self.group))
            .and_then(|e| e.optional("active", &self.active))
            .and_then(|e| e.optional("metadata", &self.metadata))
            .map_err(Error::ser)?;
        Ok(body.finish())
    }
}

/// The parameters for [get_catalog_entry][crate::client::GlobalCatalog::get_catalog_entry].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetCatalogEntryOptions {
    /// The catalog ID of the entry.
    pub id: String,
    pub account: Option<String>,
    pub include: Option<String>,
    pub languages: Option<String>,
    pub complete: Option<String>,
    /// Return the children down to the given depth, `0` means no children.
    pub depth: Option<i64>,
    pub headers: HashMap<String, String>,
}

impl GetCatalogEntryOptions {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [update_catalog_entry][crate::client::GlobalCatalog::update_catalog_entry].
///
/// The request body is the full entry, the `id` selects the entry to replace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateCatalogEntryOptions {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub overview_ui: OverviewUi,
    pub images: Image,
    pub disabled: bool,
    pub tags: Vec<String>,
    pub provider: Provider,
    pub parent_id: Option<String>,
    pub group: Option<bool>,
    pub active: Option<bool>,
    pub metadata: Option<CatalogEntryMetadata>,
    pub account: Option<String>,
    /// Reparenting object. In the body set the `parent_id` to a different
    /// parent, or remove it to make this a top level entry. Set to `true`.
    pub r#move: Option<String>,
    pub headers: HashMap<String, String>,
}

impl UpdateCatalogEntryOptions {
    #[allow(clippy::too_many_arguments)]
    pub fn new<I, N, K>(
        id: I,
        name: N,
        kind: K,
        overview_ui: OverviewUi,
        images: Image,
        disabled: bool,
        tags: Vec<String>,
        provider: Provider,
    ) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        K: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            overview_ui,
            images,
            disabled,
            tags,
            provider,
            ..Default::default()
        }
    }

    pub(crate) fn body(&self) -> Result<Map<String, Value>> {
        require("name", &self.name)?;
        require("kind", &self.kind)?;
        require_nested(&self.overview_ui, &self.images, &self.provider)?;
        let body = ObjectEncoder::new("UpdateCatalogEntryOptions")
            .field("name", &self.name)
            .and_then(|e| e.field("kind", &self.kind))
            .and_then(|e| e.field("overview_ui", &self.overview_ui))
            .and_then(|e| e.field("images", &self.images))
            .and_then(|e| e.field("disabled", &self.disabled))
            .and_then(|e| e.field("tags", &self.tags))
            .and_then(|e| e.field("provider", &self.provider))
            .and_then(|e| e.optional("parent_id", &self.parent_id))
            .and_then(|e| e.optional("group", &self.group))
            .and_then(|e| e.optional("active", &self.active))
            .and_then(|e| e.optional("metadata", &self.metadata))
            .map_err(Error::ser)?;
        Ok(body.finish())
    }
}

/// The parameters for [delete_catalog_entry][crate::client::GlobalCatalog::delete_catalog_entry].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteCatalogEntryOptions {
    pub id: String,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteCatalogEntryOptions {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [get_child_objects][crate::client::GlobalCatalog::get_child_objects].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetChildObjectsOptions {
    /// The parent catalog ID.
    pub id: String,
    /// The kind of child, use `*` for all kinds.
    pub kind: String,
    pub account: Option<String>,
    pub include: Option<String>,
    pub q: Option<String>,
    pub sort_by: Option<String>,
    pub descending: Option<String>,
    pub languages: Option<String>,
    pub complete: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetChildObjectsOptions {
    pub fn new<I: Into<String>, K: Into<String>>(id: I, kind: K) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [restore_catalog_entry][crate::client::GlobalCatalog::restore_catalog_entry].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestoreCatalogEntryOptions {
    pub id: String,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl RestoreCatalogEntryOptions {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [get_visibility][crate::client::GlobalCatalog::get_visibility].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetVisibilityOptions {
    pub id: String,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetVisibilityOptions {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [update_visibility][crate::client::GlobalCatalog::update_visibility].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateVisibilityOptions {
    pub id: String,
    /// The accounts that can see the entry.
    pub include: Option<VisibilityDetail>,
    /// The accounts that cannot see the entry.
    pub exclude: Option<VisibilityDetail>,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl UpdateVisibilityOptions {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub(crate) fn body(&self) -> Result<Map<String, Value>> {
        let body = ObjectEncoder::new("UpdateVisibilityOptions")
            .optional("include", &self.include)
            .and_then(|e| e.optional("exclude", &self.exclude))
            .map_err(Error::ser)?;
        Ok(body.finish())
    }
}

/// The parameters for [get_pricing][crate::client::GlobalCatalog::get_pricing].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetPricingOptions {
    pub id: String,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetPricingOptions {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [get_audit_logs][crate::client::GlobalCatalog::get_audit_logs].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetAuditLogsOptions {
    pub id: String,
    pub account: Option<String>,
    /// Sort order, `true` for ascending.
    pub ascending: Option<String>,
    /// Starting time for the logs, e.g. `2019-01-01T00:00:00Z`.
    pub startat: Option<String>,
    /// Count of records to skip, sent as `_offset`.
    pub offset: Option<i64>,
    /// Maximum number of records to return, sent as `_limit`.
    pub limit: Option<i64>,
    pub headers: HashMap<String, String>,
}

impl GetAuditLogsOptions {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [list_artifacts][crate::client::GlobalCatalog::list_artifacts].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListArtifactsOptions {
    /// The catalog ID of the entry owning the artifacts.
    pub object_id: String,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListArtifactsOptions {
    pub fn new<T: Into<String>>(object_id: T) -> Self {
        Self {
            object_id: object_id.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [get_artifact][crate::client::GlobalCatalog::get_artifact].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetArtifactOptions {
    pub object_id: String,
    pub artifact_id: String,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetArtifactOptions {
    pub fn new<O: Into<String>, A: Into<String>>(object_id: O, artifact_id: A) -> Self {
        Self {
            object_id: object_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [upload_artifact][crate::client::GlobalCatalog::upload_artifact].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadArtifactOptions {
    pub object_id: String,
    pub artifact_id: String,
    /// The artifact contents. An unset value uploads an empty artifact.
    pub artifact: Option<Bytes>,
    /// The `Content-Type` of the artifact.
    pub content_type: Option<String>,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl UploadArtifactOptions {
    pub fn new<O: Into<String>, A: Into<String>>(object_id: O, artifact_id: A) -> Self {
        Self {
            object_id: object_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }
}

/// The parameters for [delete_artifact][crate::client::GlobalCatalog::delete_artifact].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteArtifactOptions {
    pub object_id: String,
    pub artifact_id: String,
    pub account: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteArtifactOptions {
    pub fn new<O: Into<String>, A: Into<String>>(object_id: O, artifact_id: A) -> Self {
        Self {
            object_id: object_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }
}

fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(validation::missing(name));
    }
    Ok(())
}

// The required properties of the nested objects in a catalog entry body.
fn require_nested(overview_ui: &OverviewUi, images: &Image, provider: &Provider) -> Result<()> {
    require("images.image", &images.image)?;
    require("provider.email", &provider.email)?;
    require("provider.name", &provider.name)?;
    for overview in overview_ui.values() {
        require("overview_ui.display_name", &overview.display_name)?;
        require("overview_ui.long_description", &overview.long_description)?;
        require("overview_ui.description", &overview.description)?;
    }
    Ok(())
}
