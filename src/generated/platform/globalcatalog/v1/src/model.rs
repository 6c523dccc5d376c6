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

//! The resources and sub-objects returned by the Global Catalog service.
//!
//! Each type implements [Model], tying it to a `static` [Schema] used to
//! decode service payloads. Required properties use bare types, optional
//! properties use `Option<T>`. Properties with no fixed shape use
//! [serde_json::Value].

use sdk::mapping::{DecodeError, Field, Kind, Model, Schema};
use serde_json::Value;
use std::collections::HashMap;
use time::OffsetDateTime;

macro_rules! model {
    ($type:ty, $schema:ident) => {
        impl Model for $type {
            fn schema() -> &'static Schema {
                &$schema
            }
        }
    };
}

/// Country-specific pricing information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Amount {
    /// The country this pricing applies to.
    ///
    /// The service spells this property `counrty`.
    #[serde(rename = "counrty")]
    pub country: Option<String>,
    /// The currency of the prices.
    pub currency: Option<String>,
    /// The prices for each quantity tier.
    pub prices: Option<Vec<Price>>,
}

pub static AMOUNT: Schema = Schema {
    name: "Amount",
    fields: &[
        Field::optional("counrty", Kind::String),
        Field::optional("currency", Kind::String),
        Field::optional("prices", Kind::ObjectList(&PRICE)),
    ],
};
model!(Amount, AMOUNT);

/// An artifact attached to a catalog entry.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Artifact {
    pub name: Option<String>,
    pub updated: Option<String>,
    pub url: Option<String>,
    pub etag: Option<String>,
    /// The size in bytes.
    pub size: Option<i64>,
}

pub static ARTIFACT: Schema = Schema {
    name: "Artifact",
    fields: &[
        Field::optional("name", Kind::String),
        Field::optional("updated", Kind::String),
        Field::optional("url", Kind::String),
        Field::optional("etag", Kind::String),
        Field::optional("size", Kind::Int),
    ],
};
model!(Artifact, ARTIFACT);

/// The list of artifacts of a catalog entry.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Artifacts {
    pub count: Option<i64>,
    pub resources: Option<Vec<Artifact>>,
}

pub static ARTIFACTS: Schema = Schema {
    name: "Artifacts",
    fields: &[
        Field::optional("count", Kind::Int),
        Field::optional("resources", Kind::ObjectList(&ARTIFACT)),
    ],
};
model!(Artifacts, ARTIFACTS);

/// A bullet point shown in the catalog user interface.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Bullets {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub quantity: Option<i64>,
}

pub static BULLETS: Schema = Schema {
    name: "Bullets",
    fields: &[
        Field::optional("title", Kind::String),
        Field::optional("description", Kind::String),
        Field::optional("icon", Kind::String),
        Field::optional("quantity", Kind::Int),
    ],
};
model!(Bullets, BULLETS);

/// Callback URLs used by the service broker.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Callbacks {
    /// The broker URL. The service spells this property `broker_utl`.
    pub broker_utl: Option<String>,
    pub broker_proxy_url: Option<String>,
    pub dashboard_url: Option<String>,
    pub dashboard_data_url: Option<String>,
    pub dashboard_detail_tab_url: Option<String>,
    pub dashboard_detail_tab_ext_url: Option<String>,
    pub service_monitor_api: Option<String>,
    pub service_monitor_app: Option<String>,
    pub service_staging_url: Option<String>,
    pub service_production_url: Option<String>,
}

pub static CALLBACKS: Schema = Schema {
    name: "Callbacks",
    fields: &[
        Field::optional("broker_utl", Kind::String),
        Field::optional("broker_proxy_url", Kind::String),
        Field::optional("dashboard_url", Kind::String),
        Field::optional("dashboard_data_url", Kind::String),
        Field::optional("dashboard_detail_tab_url", Kind::String),
        Field::optional("dashboard_detail_tab_ext_url", Kind::String),
        Field::optional("service_monitor_api", Kind::String),
        Field::optional("service_monitor_app", Kind::String),
        Field::optional("service_staging_url", Kind::String),
        Field::optional("service_production_url", Kind::String),
    ],
};
model!(Callbacks, CALLBACKS);

/// An entry in the global catalog.
///
/// # Example
/// ```
/// # use platform_services_globalcatalog_v1::model::CatalogEntry;
/// let payload = serde_json::json!({
///     "id": "svc1", "name": "n", "kind": "service",
///     "images": {"image": "http://x"}, "disabled": false, "tags": ["a"],
///     "provider": {"email": "e@x.com", "name": "P"}
/// });
/// let serde_json::Value::Object(map) = payload else { unreachable!() };
/// let entry = sdk::mapping::decode::<CatalogEntry>(&map)?;
/// assert_eq!(entry.provider.name, "P");
/// # Ok::<(), sdk::mapping::DecodeError>(())
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CatalogEntry {
    /// The programmatic name of this entry.
    pub name: String,
    /// The type of entry, e.g. `service`, `template` or `dashboard`.
    pub kind: String,
    /// The user interface text, by locale.
    pub overview_ui: Option<OverviewUi>,
    pub images: Image,
    pub parent_id: Option<String>,
    pub disabled: bool,
    pub tags: Vec<String>,
    pub group: Option<bool>,
    pub provider: Provider,
    pub active: Option<bool>,
    pub metadata: Option<CatalogEntryMetadata>,
    /// The catalog ID of this entry.
    pub id: Option<String>,
    pub catalog_crn: Option<Value>,
    pub url: Option<Value>,
    pub children_url: Option<Value>,
    pub geo_tags: Option<Value>,
    pub pricing_tags: Option<Value>,
    pub created: Option<Value>,
    pub updated: Option<Value>,
}

pub static CATALOG_ENTRY: Schema = Schema {
    name: "CatalogEntry",
    fields: &[
        Field::required("name", Kind::String),
        Field::required("kind", Kind::String),
        Field::optional("overview_ui", Kind::LocaleMap(&OVERVIEW)),
        Field::required("images", Kind::Object(&IMAGE)),
        Field::optional("parent_id", Kind::String),
        Field::required("disabled", Kind::Bool),
        Field::required("tags", Kind::StringList),
        Field::optional("group", Kind::Bool),
        Field::required("provider", Kind::Object(&PROVIDER)),
        Field::optional("active", Kind::Bool),
        Field::optional("metadata", Kind::Object(&CATALOG_ENTRY_METADATA)),
        Field::optional("id", Kind::String),
        Field::optional("catalog_crn", Kind::Any),
        Field::optional("url", Kind::Any),
        Field::optional("children_url", Kind::Any),
        Field::optional("geo_tags", Kind::Any),
        Field::optional("pricing_tags", Kind::Any),
        Field::optional("created", Kind::Any),
        Field::optional("updated", Kind::Any),
    ],
};
model!(CatalogEntry, CATALOG_ENTRY);

/// The possible values for [CatalogEntry::kind].
pub mod catalog_entry_kind {
    pub const DASHBOARD: &str = "dashboard";
    pub const SERVICE: &str = "service";
    pub const TEMPLATE: &str = "template";
}

/// Model used to describe metadata object returned.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CatalogEntryMetadata {
    pub rc_compatible: Option<bool>,
    pub ui: Option<UiMetaData>,
    pub compliance: Option<Vec<String>>,
    pub service: Option<ObjectMetadataBaseService>,
    pub plan: Option<ObjectMetadataBasePlan>,
    pub template: Option<ObjectMetadataBaseTemplate>,
    pub alias: Option<ObjectMetadataBaseAlias>,
    pub sla: Option<ObjectMetadataBaseSla>,
    pub callbacks: Option<Callbacks>,
    pub version: Option<String>,
    pub original_name: Option<String>,
    /// Additional information, in any shape.
    pub other: Option<Value>,
    pub pricing: Option<PricingSet>,
    pub deployment: Option<DeploymentBase>,
}

pub static CATALOG_ENTRY_METADATA: Schema = Schema {
    name: "CatalogEntryMetadata",
    fields: &[
        Field::optional("rc_compatible", Kind::Bool),
        Field::optional("ui", Kind::Object(&UI_META_DATA)),
        Field::optional("compliance", Kind::StringList),
        Field::optional("service", Kind::Object(&OBJECT_METADATA_BASE_SERVICE)),
        Field::optional("plan", Kind::Object(&OBJECT_METADATA_BASE_PLAN)),
        Field::optional("template", Kind::Object(&OBJECT_METADATA_BASE_TEMPLATE)),
        Field::optional("alias", Kind::Object(&OBJECT_METADATA_BASE_ALIAS)),
        Field::optional("sla", Kind::Object(&OBJECT_METADATA_BASE_SLA)),
        Field::optional("callbacks", Kind::Object(&CALLBACKS)),
        Field::optional("version", Kind::String),
        Field::optional("original_name", Kind::String),
        Field::optional("other", Kind::Any),
        Field::optional("pricing", Kind::Object(&PRICING_SET)),
        Field::optional("deployment", Kind::Object(&DEPLOYMENT_BASE)),
    ],
};
model!(CatalogEntryMetadata, CATALOG_ENTRY_METADATA);

/// Deployment information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DeploymentBase {
    pub location: Option<String>,
    pub target_crn: Option<String>,
    pub broker: Option<DeploymentBaseBroker>,
    pub supports_rc_migration: Option<bool>,
    pub target_network: Option<String>,
}

pub static DEPLOYMENT_BASE: Schema = Schema {
    name: "DeploymentBase",
    fields: &[
        Field::optional("location", Kind::String),
        Field::optional("target_crn", Kind::String),
        Field::optional("broker", Kind::Object(&DEPLOYMENT_BASE_BROKER)),
        Field::optional("supports_rc_migration", Kind::Bool),
        Field::optional("target_network", Kind::String),
    ],
};
model!(DeploymentBase, DEPLOYMENT_BASE);

/// The broker associated with a deployment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DeploymentBaseBroker {
    pub name: Option<String>,
    pub guid: Option<String>,
}

pub static DEPLOYMENT_BASE_BROKER: Schema = Schema {
    name: "DeploymentBaseBroker",
    fields: &[
        Field::optional("name", Kind::String),
        Field::optional("guid", Kind::String),
    ],
};
model!(DeploymentBaseBroker, DEPLOYMENT_BASE_BROKER);

/// Image annotation for this catalog entry.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Image {
    /// URL for the large, default image.
    pub image: String,
    pub small_image: Option<String>,
    pub medium_image: Option<String>,
    pub feature_image: Option<String>,
}

pub static IMAGE: Schema = Schema {
    name: "Image",
    fields: &[
        Field::required("image", Kind::String),
        Field::optional("small_image", Kind::String),
        Field::optional("medium_image", Kind::String),
        Field::optional("feature_image", Kind::String),
    ],
};
model!(Image, IMAGE);

/// Plan pricing metrics.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Metrics {
    pub metric_id: Option<String>,
    pub tier_model: Option<String>,
    pub charge_unit_name: Option<String>,
    pub charge_unit_quantity: Option<String>,
    pub resource_display_name: Option<String>,
    pub charge_unit_display_name: Option<String>,
    pub usage_cap_qty: Option<i64>,
    pub amounts: Option<Vec<Amount>>,
}

pub static METRICS: Schema = Schema {
    name: "Metrics",
    fields: &[
        Field::optional("metric_id", Kind::String),
        Field::optional("tier_model", Kind::String),
        Field::optional("charge_unit_name", Kind::String),
        Field::optional("charge_unit_quantity", Kind::String),
        Field::optional("resource_display_name", Kind::String),
        Field::optional("charge_unit_display_name", Kind::String),
        Field::optional("usage_cap_qty", Kind::Int),
        Field::optional("amounts", Kind::ObjectList(&AMOUNT)),
    ],
};
model!(Metrics, METRICS);

/// Alias-related metadata.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectMetadataBaseAlias {
    pub r#type: Option<String>,
    pub plan_id: Option<String>,
}

pub static OBJECT_METADATA_BASE_ALIAS: Schema = Schema {
    name: "ObjectMetadataBaseAlias",
    fields: &[
        Field::optional("type", Kind::String),
        Field::optional("plan_id", Kind::String),
    ],
};
model!(ObjectMetadataBaseAlias, OBJECT_METADATA_BASE_ALIAS);

/// Plan-related metadata.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectMetadataBasePlan {
    pub bindable: Option<bool>,
    pub reservable: Option<bool>,
    pub allow_internal_users: Option<bool>,
    pub async_provisioning_supported: Option<bool>,
    pub async_unprovisioning_supported: Option<bool>,
    pub test_check_interval: Option<i64>,
    pub single_scope_instance: Option<String>,
    pub service_check_enabled: Option<bool>,
    pub cf_guid: Option<String>,
}

pub static OBJECT_METADATA_BASE_PLAN: Schema = Schema {
    name: "ObjectMetadataBasePlan",
    fields: &[
        Field::optional("bindable", Kind::Bool),
        Field::optional("reservable", Kind::Bool),
        Field::optional("allow_internal_users", Kind::Bool),
        Field::optional("async_provisioning_supported", Kind::Bool),
        Field::optional("async_unprovisioning_supported", Kind::Bool),
        Field::optional("test_check_interval", Kind::Int),
        Field::optional("single_scope_instance", Kind::String),
        Field::optional("service_check_enabled", Kind::Bool),
        Field::optional("cf_guid", Kind::String),
    ],
};
model!(ObjectMetadataBasePlan, OBJECT_METADATA_BASE_PLAN);

/// Service-related metadata.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectMetadataBaseService {
    pub r#type: Option<String>,
    pub iam_compatible: Option<bool>,
    pub unique_api_key: Option<bool>,
    pub provisionable: Option<bool>,
    pub async_provisioning_supported: Option<bool>,
    pub async_unprovisioning_supported: Option<bool>,
    pub cf_guid: Option<String>,
    pub bindable: Option<bool>,
    pub requires: Option<Vec<String>>,
    pub plan_updateable: Option<bool>,
    pub state: Option<String>,
    pub service_check_enabled: Option<bool>,
    pub test_check_interval: Option<i64>,
    pub service_key_supported: Option<bool>,
}

pub static OBJECT_METADATA_BASE_SERVICE: Schema = Schema {
    name: "ObjectMetadataBaseService",
    fields: &[
        Field::optional("type", Kind::String),
        Field::optional("iam_compatible", Kind::Bool),
        Field::optional("unique_api_key", Kind::Bool),
        Field::optional("provisionable", Kind::Bool),
        Field::optional("async_provisioning_supported", Kind::Bool),
        Field::optional("async_unprovisioning_supported", Kind::Bool),
        Field::optional("cf_guid", Kind::String),
        Field::optional("bindable", Kind::Bool),
        Field::optional("requires", Kind::StringList),
        Field::optional("plan_updateable", Kind::Bool),
        Field::optional("state", Kind::String),
        Field::optional("service_check_enabled", Kind::Bool),
        Field::optional("test_check_interval", Kind::Int),
        Field::optional("service_key_supported", Kind::Bool),
    ],
};
model!(ObjectMetadataBaseService, OBJECT_METADATA_BASE_SERVICE);

/// Service Level Agreement related metadata.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectMetadataBaseSla {
    pub terms: Option<String>,
    pub tenancy: Option<String>,
    pub provisioning: Option<String>,
    pub responsiveness: Option<String>,
    pub dr: Option<ObjectMetadataBaseSlaDr>,
}

pub static OBJECT_METADATA_BASE_SLA: Schema = Schema {
    name: "ObjectMetadataBaseSla",
    fields: &[
        Field::optional("terms", Kind::String),
        Field::optional("tenancy", Kind::String),
        Field::optional("provisioning", Kind::String),
        Field::optional("responsiveness", Kind::String),
        Field::optional("dr", Kind::Object(&OBJECT_METADATA_BASE_SLA_DR)),
    ],
};
model!(ObjectMetadataBaseSla, OBJECT_METADATA_BASE_SLA);

/// Disaster recovery information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectMetadataBaseSlaDr {
    pub dr: Option<bool>,
    pub description: Option<String>,
}

pub static OBJECT_METADATA_BASE_SLA_DR: Schema = Schema {
    name: "ObjectMetadataBaseSlaDr",
    fields: &[
        Field::optional("dr", Kind::Bool),
        Field::optional("description", Kind::String),
    ],
};
model!(ObjectMetadataBaseSlaDr, OBJECT_METADATA_BASE_SLA_DR);

/// Template-related metadata.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectMetadataBaseTemplate {
    pub services: Option<Vec<String>>,
    pub default_memory: Option<i64>,
    pub start_cmd: Option<String>,
    pub source: Option<ObjectMetadataBaseTemplateSource>,
    pub runtime_catalog_id: Option<String>,
    pub cf_runtime_id: Option<String>,
    pub template_id: Option<String>,
    pub executable_file: Option<String>,
    pub buildpack: Option<String>,
    pub environment_variables: Option<ObjectMetadataBaseTemplateEnvironmentVariables>,
}

pub static OBJECT_METADATA_BASE_TEMPLATE: Schema = Schema {
    name: "ObjectMetadataBaseTemplate",
    fields: &[
        Field::optional("services", Kind::StringList),
        Field::optional("default_memory", Kind::Int),
        Field::optional("start_cmd", Kind::String),
        Field::optional("source", Kind::Object(&OBJECT_METADATA_BASE_TEMPLATE_SOURCE)),
        Field::optional("runtime_catalog_id", Kind::String),
        Field::optional("cf_runtime_id", Kind::String),
        Field::optional("template_id", Kind::String),
        Field::optional("executable_file", Kind::String),
        Field::optional("buildpack", Kind::String),
        Field::optional(
            "environment_variables",
            Kind::Object(&OBJECT_METADATA_BASE_TEMPLATE_ENVIRONMENT_VARIABLES),
        ),
    ],
};
model!(ObjectMetadataBaseTemplate, OBJECT_METADATA_BASE_TEMPLATE);

/// Environment variables for a template.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectMetadataBaseTemplateEnvironmentVariables {
    #[serde(rename = "_key_")]
    pub key: Option<String>,
}

pub static OBJECT_METADATA_BASE_TEMPLATE_ENVIRONMENT_VARIABLES: Schema = Schema {
    name: "ObjectMetadataBaseTemplateEnvironmentVariables",
    fields: &[Field::optional("_key_", Kind::String)],
};
model!(
    ObjectMetadataBaseTemplateEnvironmentVariables,
    OBJECT_METADATA_BASE_TEMPLATE_ENVIRONMENT_VARIABLES
);

/// Location of the template source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectMetadataBaseTemplateSource {
    pub path: Option<String>,
    pub r#type: Option<String>,
    pub url: Option<String>,
}

pub static OBJECT_METADATA_BASE_TEMPLATE_SOURCE: Schema = Schema {
    name: "ObjectMetadataBaseTemplateSource",
    fields: &[
        Field::optional("path", Kind::String),
        Field::optional("type", Kind::String),
        Field::optional("url", Kind::String),
    ],
};
model!(ObjectMetadataBaseTemplateSource, OBJECT_METADATA_BASE_TEMPLATE_SOURCE);

/// Overview is nested in the top level. The key value pair is `[_language_]overview_ui`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Overview {
    /// The translated display name.
    pub display_name: String,
    /// The translated long description.
    pub long_description: String,
    /// The translated description.
    pub description: String,
}

pub static OVERVIEW: Schema = Schema {
    name: "Overview",
    fields: &[
        Field::required("display_name", Kind::String),
        Field::required("long_description", Kind::String),
        Field::required("description", Kind::String),
    ],
};
model!(Overview, OVERVIEW);

/// The user interface text of a catalog entry, keyed by locale.
pub type OverviewUi = HashMap<String, Overview>;

/// The user interface strings, keyed by locale.
pub type I18n = HashMap<String, Strings>;

/// Pricing-related information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Price {
    /// The quantity tier.
    pub quantity_tier: Option<i64>,
    /// The price for the tier.
    #[serde(rename = "Price")]
    pub price: Option<f64>,
}

pub static PRICE: Schema = Schema {
    name: "Price",
    fields: &[
        Field::optional("quantity_tier", Kind::Int),
        Field::optional("Price", Kind::Float),
    ],
};
model!(Price, PRICE);

/// Pricing-related information, as returned by
/// [get_pricing][crate::client::GlobalCatalog::get_pricing].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PricingGet {
    pub r#type: Option<String>,
    pub origin: Option<String>,
    pub starting_price: Option<StartingPrice>,
    pub metrics: Option<Vec<Metrics>>,
}

pub static PRICING_GET: Schema = Schema {
    name: "PricingGet",
    fields: &[
        Field::optional("type", Kind::String),
        Field::optional("origin", Kind::String),
        Field::optional("starting_price", Kind::Object(&STARTING_PRICE)),
        Field::optional("metrics", Kind::ObjectList(&METRICS)),
    ],
};
model!(PricingGet, PRICING_GET);

/// Pricing-related information, as set in the entry metadata.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PricingSet {
    pub r#type: Option<String>,
    pub origin: Option<String>,
    pub starting_price: Option<StartingPrice>,
}

pub static PRICING_SET: Schema = Schema {
    name: "PricingSet",
    fields: &[
        Field::optional("type", Kind::String),
        Field::optional("origin", Kind::String),
        Field::optional("starting_price", Kind::Object(&STARTING_PRICE)),
    ],
};
model!(PricingSet, PRICING_SET);

/// Information related to the provider associated with a catalog entry.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Provider {
    /// Provider's email address.
    pub email: String,
    /// Provider's name.
    pub name: String,
    pub contact: Option<String>,
    pub support_email: Option<String>,
    pub phone: Option<String>,
}

pub static PROVIDER: Schema = Schema {
    name: "Provider",
    fields: &[
        Field::required("email", Kind::String),
        Field::required("name", Kind::String),
        Field::optional("contact", Kind::String),
        Field::optional("support_email", Kind::String),
        Field::optional("phone", Kind::String),
    ],
};
model!(Provider, PROVIDER);

/// A page of search results.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SearchResult {
    /// The current page.
    ///
    /// The service documents the counters as strings, some deployments send
    /// numbers. Either form decodes, numbers are kept as their decimal text.
    pub page: Option<String>,
    pub results_per_page: Option<String>,
    pub total_results: Option<String>,
    /// The resources in this page.
    ///
    /// Depending on the operation these are catalog entries or audit log
    /// records, use [entries()][SearchResult::entries] to decode catalog
    /// entries.
    pub resources: Option<Vec<Value>>,
}

pub static SEARCH_RESULT: Schema = Schema {
    name: "SearchResult",
    fields: &[
        Field::optional("page", Kind::NumericString),
        Field::optional("results_per_page", Kind::NumericString),
        Field::optional("total_results", Kind::NumericString),
        Field::optional("resources", Kind::AnyList),
    ],
};
model!(SearchResult, SEARCH_RESULT);

impl SearchResult {
    /// Decodes the resources as catalog entries.
    pub fn entries(&self) -> Result<Vec<CatalogEntry>, DecodeError> {
        match &self.resources {
            None => Ok(Vec::new()),
            Some(resources) => sdk::mapping::decode_list(resources),
        }
    }
}

/// Appropriate entity to set the starting price for a plan.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StartingPrice {
    pub plan_id: Option<String>,
    pub deployment_id: Option<String>,
    pub amount: Option<Vec<Amount>>,
}

pub static STARTING_PRICE: Schema = Schema {
    name: "StartingPrice",
    fields: &[
        Field::optional("plan_id", Kind::String),
        Field::optional("deployment_id", Kind::String),
        Field::optional("amount", Kind::ObjectList(&AMOUNT)),
    ],
};
model!(StartingPrice, STARTING_PRICE);

/// Information related to a translated text message.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Strings {
    pub bullets: Option<Vec<Bullets>>,
    pub media: Option<Vec<UiMetaMedia>>,
    pub not_creatable_msg: Option<String>,
    #[serde(rename = "not_creatable__robot_msg")]
    pub not_creatable_robot_msg: Option<String>,
    pub deprecation_warning: Option<String>,
    pub popup_warning_message: Option<String>,
    pub instruction: Option<String>,
}

pub static STRINGS: Schema = Schema {
    name: "Strings",
    fields: &[
        Field::optional("bullets", Kind::ObjectList(&BULLETS)),
        Field::optional("media", Kind::ObjectList(&UI_META_MEDIA)),
        Field::optional("not_creatable_msg", Kind::String),
        Field::optional("not_creatable__robot_msg", Kind::String),
        Field::optional("deprecation_warning", Kind::String),
        Field::optional("popup_warning_message", Kind::String),
        Field::optional("instruction", Kind::String),
    ],
};
model!(Strings, STRINGS);

/// Information related to the UI presentation associated with a catalog entry.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UiMetaData {
    /// Language specific translation of translation properties.
    pub strings: Option<I18n>,
    pub urls: Option<Urls>,
    pub embeddable_dashboard: Option<String>,
    pub embeddable_dashboard_full_width: Option<bool>,
    pub navigation_order: Option<Vec<String>>,
    pub not_creatable: Option<bool>,
    pub reservable: Option<bool>,
    pub primary_offering_id: Option<String>,
    pub accessible_during_provision: Option<bool>,
    pub side_by_side_index: Option<i64>,
    /// Date and time the service will no longer be available.
    #[serde(default, with = "sdk::mapping::timestamp")]
    pub end_of_service_time: Option<OffsetDateTime>,
}

pub static UI_META_DATA: Schema = Schema {
    name: "UiMetaData",
    fields: &[
        Field::optional("strings", Kind::LocaleMap(&STRINGS)),
        Field::optional("urls", Kind::Object(&URLS)),
        Field::optional("embeddable_dashboard", Kind::String),
        Field::optional("embeddable_dashboard_full_width", Kind::Bool),
        Field::optional("navigation_order", Kind::StringList),
        Field::optional("not_creatable", Kind::Bool),
        Field::optional("reservable", Kind::Bool),
        Field::optional("primary_offering_id", Kind::String),
        Field::optional("accessible_during_provision", Kind::Bool),
        Field::optional("side_by_side_index", Kind::Int),
        Field::optional("end_of_service_time", Kind::Timestamp),
    ],
};
model!(UiMetaData, UI_META_DATA);

/// Media-related metadata.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UiMetaMedia {
    pub caption: Option<String>,
    pub thumbnail_url: Option<String>,
    pub r#type: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub source: Option<Bullets>,
}

pub static UI_META_MEDIA: Schema = Schema {
    name: "UiMetaMedia",
    fields: &[
        Field::optional("caption", Kind::String),
        Field::optional("thumbnail_url", Kind::String),
        Field::optional("type", Kind::String),
        Field::optional("URL", Kind::String),
        Field::optional("source", Kind::Object(&BULLETS)),
    ],
};
model!(UiMetaMedia, UI_META_MEDIA);

/// UI-related URLs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Urls {
    pub doc_url: Option<String>,
    pub instructions_url: Option<String>,
    pub api_url: Option<String>,
    pub create_url: Option<String>,
    pub sdk_download_url: Option<String>,
    pub terms_url: Option<String>,
    pub custom_create_page_url: Option<String>,
    pub catalog_details_url: Option<String>,
    pub deprecation_doc_url: Option<String>,
}

pub static URLS: Schema = Schema {
    name: "Urls",
    fields: &[
        Field::optional("doc_url", Kind::String),
        Field::optional("instructions_url", Kind::String),
        Field::optional("api_url", Kind::String),
        Field::optional("create_url", Kind::String),
        Field::optional("sdk_download_url", Kind::String),
        Field::optional("terms_url", Kind::String),
        Field::optional("custom_create_page_url", Kind::String),
        Field::optional("catalog_details_url", Kind::String),
        Field::optional("deprecation_doc_url", Kind::String),
    ],
};
model!(Urls, URLS);

/// Information related to the visibility of a catalog entry.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Visibility {
    /// The level of visibility, e.g. `public` or `ibm_only`.
    pub restrictions: Option<String>,
    pub owner: Option<String>,
    pub include: Option<VisibilityDetail>,
    pub exclude: Option<VisibilityDetail>,
    pub approved: Option<bool>,
}

pub static VISIBILITY: Schema = Schema {
    name: "Visibility",
    fields: &[
        Field::optional("restrictions", Kind::String),
        Field::optional("owner", Kind::String),
        Field::optional("include", Kind::Object(&VISIBILITY_DETAIL)),
        Field::optional("exclude", Kind::Object(&VISIBILITY_DETAIL)),
        Field::optional("approved", Kind::Bool),
    ],
};
model!(Visibility, VISIBILITY);

/// Visibility details related to a catalog entry.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VisibilityDetail {
    /// Information related to the accounts for which a catalog entry is visible.
    pub accounts: VisibilityDetailAccounts,
}

pub static VISIBILITY_DETAIL: Schema = Schema {
    name: "VisibilityDetail",
    fields: &[Field::required("accounts", Kind::Object(&VISIBILITY_DETAIL_ACCOUNTS))],
};
model!(VisibilityDetail, VISIBILITY_DETAIL);

/// Information related to the accounts for which a catalog entry is visible.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VisibilityDetailAccounts {
    /// (_accountid_) - Entries that are visible to the given account.
    #[serde(rename = "_accountid_")]
    pub accountid: Option<String>,
}

pub static VISIBILITY_DETAIL_ACCOUNTS: Schema = Schema {
    name: "VisibilityDetailAccounts",
    fields: &[Field::optional("_accountid_", Kind::String)],
};
model!(VisibilityDetailAccounts, VISIBILITY_DETAIL_ACCOUNTS);
