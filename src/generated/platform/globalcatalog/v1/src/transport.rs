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

use crate::Result;
use crate::model;
use crate::options::*;
use http::Method;
use sdk::client_builder::internal::ClientConfig;
use sdk::http::{Accept, ReqwestTransport, Request, Transport};
use sdk::options::RequestOptions;
use sdk::response::Response;
use std::sync::Arc;

/// Implements [GlobalCatalog](super::stub::GlobalCatalog) using a [Transport].
#[derive(Clone, Debug)]
pub struct GlobalCatalog {
    inner: Arc<dyn Transport>,
}

impl GlobalCatalog {
    pub async fn new(config: ClientConfig) -> sdk::client_builder::Result<Self> {
        let inner = ReqwestTransport::new(config, &crate::info::SERVICE)?;
        Ok(Self::with_transport(Arc::new(inner)))
    }

    pub(crate) fn with_transport(inner: Arc<dyn Transport>) -> Self {
        Self { inner }
    }
}

impl super::stub::GlobalCatalog for GlobalCatalog {
    async fn list_catalog_entries(
        &self,
        req: ListCatalogEntriesOptions,
        options: RequestOptions,
    ) -> Result<Response<model::SearchResult>> {
        let request = Request::new(Method::GET, "ListCatalogEntries")
            .query("account", req.account)
            .query("include", req.include)
            .query("q", req.q)
            .query("sort-by", req.sort_by)
            .query("descending", req.descending)
            .query("languages", req.languages)
            .query("complete", req.complete);
        self.inner.execute(request, options).await?.decode()
    }

    async fn create_catalog_entry(
        &self,
        req: CreateCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<model::CatalogEntry>> {
        let request = Request::new(Method::POST, "CreateCatalogEntry")
            .json(req.body()?)
            .query("account", req.account);
        self.inner.execute(request, options).await?.decode()
    }

    async fn get_catalog_entry(
        &self,
        req: GetCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<model::CatalogEntry>> {
        let request = Request::new(Method::GET, "GetCatalogEntry")
            .path_parameter("id", &req.id)?
            .query("account", req.account)
            .query("include", req.include)
            .query("languages", req.languages)
            .query("complete", req.complete)
            .query("depth", req.depth);
        self.inner.execute(request, options).await?.decode()
    }

    async fn update_catalog_entry(
        &self,
        req: UpdateCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<model::CatalogEntry>> {
        let request = Request::new(Method::PUT, "UpdateCatalogEntry")
            .path_parameter("id", &req.id)?
            .json(req.body()?)
            .query("account", req.account)
            .query("move", req.r#move);
        self.inner.execute(request, options).await?.decode()
    }

    async fn delete_catalog_entry(
        &self,
        req: DeleteCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let request = Request::new(Method::DELETE, "DeleteCatalogEntry")
            .path_parameter("id", &req.id)?
            .query("account", req.account)
            .accept(Accept::None);
        Ok(self.inner.execute(request, options).await?.discard())
    }

    async fn get_child_objects(
        &self,
        req: GetChildObjectsOptions,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::SearchResult>>> {
        let request = Request::new(Method::GET, "GetChildObjects")
            .path_parameter("id", &req.id)?
            .path_parameter("kind", &req.kind)?
            .query("account", req.account)
            .query("include", req.include)
            .query("q", req.q)
            .query("sort-by", req.sort_by)
            .query("descending", req.descending)
            .query("languages", req.languages)
            .query("complete", req.complete);
        self.inner.execute(request, options).await?.decode_list()
    }

    async fn restore_catalog_entry(
        &self,
        req: RestoreCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let request = Request::new(Method::PUT, "RestoreCatalogEntry")
            .path_parameter("id", &req.id)?
            .segment("restore")
            .query("account", req.account)
            .accept(Accept::None);
        Ok(self.inner.execute(request, options).await?.discard())
    }

    async fn get_visibility(
        &self,
        req: GetVisibilityOptions,
        options: RequestOptions,
    ) -> Result<Response<model::Visibility>> {
        let request = Request::new(Method::GET, "GetVisibility")
            .path_parameter("id", &req.id)?
            .segment("visibility")
            .query("account", req.account);
        self.inner.execute(request, options).await?.decode()
    }

    async fn update_visibility(
        &self,
        req: UpdateVisibilityOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let request = Request::new(Method::PUT, "UpdateVisibility")
            .path_parameter("id", &req.id)?
            .segment("visibility")
            .json(req.body()?)
            .query("account", req.account)
            .accept(Accept::None);
        Ok(self.inner.execute(request, options).await?.discard())
    }

    async fn get_pricing(
        &self,
        req: GetPricingOptions,
        options: RequestOptions,
    ) -> Result<Response<model::PricingGet>> {
        let request = Request::new(Method::GET, "GetPricing")
            .path_parameter("id", &req.id)?
            .segment("pricing")
            .query("account", req.account);
        self.inner.execute(request, options).await?.decode()
    }

    async fn get_audit_logs(
        &self,
        req: GetAuditLogsOptions,
        options: RequestOptions,
    ) -> Result<Response<model::SearchResult>> {
        let request = Request::new(Method::GET, "GetAuditLogs")
            .path_parameter("id", &req.id)?
            .segment("logs")
            .query("account", req.account)
            .query("ascending", req.ascending)
            .query("startat", req.startat)
            .query("_offset", req.offset)
            .query("_limit", req.limit);
        self.inner.execute(request, options).await?.decode()
    }

    async fn list_artifacts(
        &self,
        req: ListArtifactsOptions,
        options: RequestOptions,
    ) -> Result<Response<model::Artifacts>> {
        let request = Request::new(Method::GET, "ListArtifacts")
            .path_parameter("object_id", &req.object_id)?
            .segment("artifacts")
            .query("account", req.account);
        self.inner.execute(request, options).await?.decode()
    }

    async fn get_artifact(
        &self,
        req: GetArtifactOptions,
        options: RequestOptions,
    ) -> Result<Response<bytes::Bytes>> {
        let request = Request::new(Method::GET, "GetArtifact")
            .path_parameter("object_id", &req.object_id)?
            .segment("artifacts")
            .path_parameter("artifact_id", &req.artifact_id)?
            .query("account", req.account)
            .accept(Accept::Binary);
        self.inner.execute(request, options).await?.into_bytes()
    }

    async fn upload_artifact(
        &self,
        req: UploadArtifactOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let request = Request::new(Method::PUT, "UploadArtifact")
            .path_parameter("object_id", &req.object_id)?
            .segment("artifacts")
            .path_parameter("artifact_id", &req.artifact_id)?
            .bytes(req.content_type, req.artifact.unwrap_or_default())
            .query("account", req.account)
            .accept(Accept::None);
        Ok(self.inner.execute(request, options).await?.discard())
    }

    async fn delete_artifact(
        &self,
        req: DeleteArtifactOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let request = Request::new(Method::DELETE, "DeleteArtifact")
            .path_parameter("object_id", &req.object_id)?
            .segment("artifacts")
            .path_parameter("artifact_id", &req.artifact_id)?
            .query("account", req.account)
            .accept(Accept::None);
        Ok(self.inner.execute(request, options).await?.discard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::GlobalCatalog as _;
    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use sdk::http::{Body, Payload};
    use sdk::mapping::DecodeError;
    use sdk::response::Parts;
    use serde_json::{Value, json};
    use std::error::Error as _;
    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        Transport {}
        #[async_trait::async_trait]
        impl sdk::http::Transport for Transport {
            async fn execute(
                &self,
                request: Request,
                options: RequestOptions,
            ) -> Result<Response<Payload>>;
        }
    }

    fn json_response(body: Value) -> Result<Response<Payload>> {
        Ok(Response::from_parts(
            Parts::new().set_status(StatusCode::OK),
            Payload::Json(body),
        ))
    }

    fn entry_json() -> Value {
        json!({
            "id": "svc1", "name": "n", "kind": "service",
            "images": {"image": "http://x"}, "disabled": false,
            "tags": ["a", "b"], "provider": {"email": "e@x.com", "name": "P"}
        })
    }

    fn stub(mock: MockTransport) -> GlobalCatalog {
        GlobalCatalog::with_transport(Arc::new(mock))
    }

    #[tokio::test]
    async fn list_catalog_entries_request() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| {
                r.method() == Method::GET
                    && r.path() == "/"
                    && r.operation() == "ListCatalogEntries"
                    && r.query_pairs()
                        == [
                            ("account".to_string(), "global".to_string()),
                            ("q".to_string(), "kind:service".to_string()),
                            ("sort-by".to_string(), "name".to_string()),
                        ]
                    && r.accept_kind() == Accept::Json
            })
            .return_once(|_, _| {
                json_response(json!({
                    "page": "Page",
                    "results_per_page": "ResultsPerPage",
                    "total_results": 1,
                    "resources": [entry_json()]
                }))
            });
        let req = ListCatalogEntriesOptions {
            account: Some("global".into()),
            q: Some("kind:service".into()),
            sort_by: Some("name".into()),
            ..Default::default()
        };
        let response = stub(mock).list_catalog_entries(req, RequestOptions::default()).await?;
        let body = response.into_body();
        assert_eq!(body.page.as_deref(), Some("Page"));
        assert_eq!(body.results_per_page.as_deref(), Some("ResultsPerPage"));
        assert_eq!(body.total_results.as_deref(), Some("1"));
        let entries = body.entries()?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.as_deref(), Some("svc1"));
        Ok(())
    }

    #[tokio::test]
    async fn get_catalog_entry_request() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, o| {
                r.method() == Method::GET
                    && r.path() == "/svc%2F1"
                    && r.query_pairs()
                        == [
                            ("include".to_string(), "*".to_string()),
                            ("depth".to_string(), "2".to_string()),
                        ]
                    && o.headers() == [("x-test".to_string(), "v".to_string())]
            })
            .return_once(|_, _| json_response(entry_json()));
        let mut req = GetCatalogEntryOptions::new("svc/1");
        req.include = Some("*".into());
        req.depth = Some(2);
        let options = RequestOptions::from_iter([("x-test", "v")]);
        let response = stub(mock).get_catalog_entry(req, options).await?;
        assert_eq!(response.body().provider.name, "P");
        Ok(())
    }

    #[tokio::test]
    async fn get_catalog_entry_empty_id() {
        let mut mock = MockTransport::new();
        mock.expect_execute().never();
        let err = stub(mock)
            .get_catalog_entry(GetCatalogEntryOptions::default(), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("id"), "{err}");
    }

    #[tokio::test]
    async fn get_catalog_entry_missing_provider() {
        let mut entry = entry_json();
        entry.as_object_mut().map(|m| m.remove("provider"));
        let mut mock = MockTransport::new();
        mock.expect_execute().return_once(move |_, _| json_response(entry));
        let err = stub(mock)
            .get_catalog_entry(GetCatalogEntryOptions::new("svc1"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<DecodeError>());
        assert!(
            matches!(source, Some(DecodeError::MissingRequiredField { field: "provider", .. })),
            "{source:?}"
        );
    }

    #[tokio::test]
    async fn get_catalog_entry_not_an_object() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .return_once(|_, _| json_response(json!(["not", "an", "object"])));
        let err = stub(mock)
            .get_catalog_entry(GetCatalogEntryOptions::new("svc1"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(
            err.to_string()
                .contains("an error occurred while processing the operation response"),
            "{err}"
        );
    }

    #[tokio::test]
    async fn create_catalog_entry_request() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| {
                let Body::Json(body) = r.body() else {
                    return false;
                };
                r.method() == Method::POST
                    && r.path() == "/"
                    && body.get("id") == Some(&json!("svc1"))
                    && body.get("overview_ui") == Some(&json!({}))
            })
            .return_once(|_, _| json_response(entry_json()));
        let req = CreateCatalogEntryOptions::new(
            "n",
            "service",
            Default::default(),
            crate::model::Image {
                image: "http://x".into(),
                ..Default::default()
            },
            false,
            vec![],
            crate::model::Provider {
                email: "e@x.com".into(),
                name: "P".into(),
                ..Default::default()
            },
            "svc1",
        );
        let response = stub(mock).create_catalog_entry(req, RequestOptions::default()).await?;
        assert_eq!(response.body().name, "n");
        Ok(())
    }

    #[tokio::test]
    async fn create_catalog_entry_empty_provider() {
        let mut mock = MockTransport::new();
        mock.expect_execute().never();
        let req = CreateCatalogEntryOptions::new(
            "n",
            "service",
            Default::default(),
            crate::model::Image {
                image: "http://x".into(),
                ..Default::default()
            },
            false,
            vec![],
            crate::model::Provider::default(),
            "svc1",
        );
        let err = stub(mock)
            .create_catalog_entry(req, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("provider.email"), "{err}");
    }

    #[tokio::test]
    async fn update_catalog_entry_request() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| {
                let Body::Json(body) = r.body() else {
                    return false;
                };
                r.method() == Method::PUT
                    && r.path() == "/svc1"
                    && !body.contains_key("id")
                    && r.query_pairs() == [("move".to_string(), "true".to_string())]
            })
            .return_once(|_, _| json_response(entry_json()));
        let mut req = UpdateCatalogEntryOptions {
            id: "svc1".into(),
            name: "n".into(),
            kind: "service".into(),
            images: crate::model::Image {
                image: "http://x".into(),
                ..Default::default()
            },
            provider: crate::model::Provider {
                email: "e@x.com".into(),
                name: "P".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        req.r#move = Some("true".into());
        let response = stub(mock).update_catalog_entry(req, RequestOptions::default()).await?;
        assert_eq!(response.body().id.as_deref(), Some("svc1"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_catalog_entry_ignores_body() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| {
                r.method() == Method::DELETE
                    && r.path() == "/svc1"
                    && r.accept_kind() == Accept::None
            })
            .return_once(|_, _| json_response(json!({"ignored": true})));
        let response = stub(mock)
            .delete_catalog_entry(DeleteCatalogEntryOptions::new("svc1"), RequestOptions::default())
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn get_child_objects_request() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| r.path() == "/svc1/%2A")
            .return_once(|_, _| json_response(json!([{"page": "1"}, {"page": 2}])));
        let response = stub(mock)
            .get_child_objects(GetChildObjectsOptions::new("svc1", "*"), RequestOptions::default())
            .await?;
        let pages: Vec<_> = response.body().iter().map(|r| r.page.as_deref()).collect();
        assert_eq!(pages, vec![Some("1"), Some("2")]);
        Ok(())
    }

    #[tokio::test]
    async fn get_child_objects_not_an_array() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .return_once(|_, _| json_response(json!({"page": 1})));
        let err = stub(mock)
            .get_child_objects(
                GetChildObjectsOptions::new("svc1", "plan"),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[tokio::test]
    async fn restore_catalog_entry_request() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| r.method() == Method::PUT && r.path() == "/svc1/restore")
            .return_once(|_, _| Ok(Response::from(Payload::Empty)));
        stub(mock)
            .restore_catalog_entry(
                RestoreCatalogEntryOptions::new("svc1"),
                RequestOptions::default(),
            )
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn visibility_requests() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| r.method() == Method::GET && r.path() == "/svc1/visibility")
            .return_once(|_, _| {
                json_response(json!({
                    "restrictions": "private",
                    "include": {"accounts": {"_accountid_": "a1"}}
                }))
            });
        mock.expect_execute()
            .withf(|r, _| {
                r.method() == Method::PUT
                    && r.path() == "/svc1/visibility"
                    && r.body() == &Body::Json(serde_json::Map::new())
            })
            .return_once(|_, _| Ok(Response::from(Payload::Empty)));
        let stub = stub(mock);
        let response = stub
            .get_visibility(GetVisibilityOptions::new("svc1"), RequestOptions::default())
            .await?;
        let visibility = response.into_body();
        assert_eq!(visibility.restrictions.as_deref(), Some("private"));
        assert_eq!(
            visibility.include.map(|d| d.accounts.accountid),
            Some(Some("a1".to_string()))
        );
        stub.update_visibility(UpdateVisibilityOptions::new("svc1"), RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_pricing_request() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| r.path() == "/svc1/pricing")
            .return_once(|_, _| {
                json_response(json!({
                    "type": "paid",
                    "metrics": [{
                        "metric_id": "m1",
                        "amounts": [{
                            "counrty": "USA",
                            "prices": [{"quantity_tier": 1, "Price": 5}]
                        }]
                    }]
                }))
            });
        let response = stub(mock)
            .get_pricing(GetPricingOptions::new("svc1"), RequestOptions::default())
            .await?;
        let metrics = response.into_body().metrics.unwrap_or_default();
        let amounts = metrics[0].amounts.clone().unwrap_or_default();
        assert_eq!(amounts[0].country.as_deref(), Some("USA"));
        assert_eq!(amounts[0].prices.as_ref().map(|p| p[0].price), Some(Some(5.0)));
        Ok(())
    }

    #[tokio::test]
    async fn get_audit_logs_request() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| {
                r.path() == "/svc1/logs"
                    && r.query_pairs()
                        == [
                            ("ascending".to_string(), "true".to_string()),
                            ("_offset".to_string(), "10".to_string()),
                            ("_limit".to_string(), "5".to_string()),
                        ]
            })
            .return_once(|_, _| {
                json_response(json!({"page": "Page", "resources": [{"action": "create"}]}))
            });
        let mut req = GetAuditLogsOptions::new("svc1");
        req.ascending = Some("true".into());
        req.offset = Some(10);
        req.limit = Some(5);
        let response = stub(mock).get_audit_logs(req, RequestOptions::default()).await?;
        assert_eq!(response.body().page.as_deref(), Some("Page"));
        assert_eq!(response.body().resources, Some(vec![json!({"action": "create"})]));
        Ok(())
    }

    #[tokio::test]
    async fn artifact_requests() -> TestResult {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|r, _| r.operation() == "ListArtifacts" && r.path() == "/obj/artifacts")
            .return_once(|_, _| {
                json_response(json!({"count": 1, "resources": [{"name": "a.txt", "size": 5}]}))
            });
        mock.expect_execute()
            .withf(|r, _| {
                r.operation() == "GetArtifact"
                    && r.path() == "/obj/artifacts/a.txt"
                    && r.accept_kind() == Accept::Binary
            })
            .return_once(|_, _| {
                Ok(Response::from(Payload::Bytes(bytes::Bytes::from_static(
                    b"hello",
                ))))
            });
        mock.expect_execute()
            .withf(|r, _| {
                r.operation() == "UploadArtifact"
                    && r.method() == Method::PUT
                    && r.body()
                        == &Body::Bytes {
                            content_type: Some("text/plain".to_string()),
                            data: bytes::Bytes::from_static(b"hello"),
                        }
            })
            .return_once(|_, _| Ok(Response::from(Payload::Empty)));
        mock.expect_execute()
            .withf(|r, _| r.operation() == "DeleteArtifact" && r.method() == Method::DELETE)
            .return_once(|_, _| Ok(Response::from(Payload::Empty)));

        let stub = stub(mock);
        let artifacts = stub
            .list_artifacts(ListArtifactsOptions::new("obj"), RequestOptions::default())
            .await?
            .into_body();
        assert_eq!(artifacts.count, Some(1));
        let data = stub
            .get_artifact(GetArtifactOptions::new("obj", "a.txt"), RequestOptions::default())
            .await?
            .into_body();
        assert_eq!(data, bytes::Bytes::from_static(b"hello"));
        let mut upload = UploadArtifactOptions::new("obj", "a.txt");
        upload.artifact = Some(bytes::Bytes::from_static(b"hello"));
        upload.content_type = Some("text/plain".into());
        stub.upload_artifact(upload, RequestOptions::default()).await?;
        stub.delete_artifact(DeleteArtifactOptions::new("obj", "a.txt"), RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn empty_artifact_id() {
        let mut mock = MockTransport::new();
        mock.expect_execute().never();
        let err = stub(mock)
            .delete_artifact(DeleteArtifactOptions::new("obj", ""), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("artifact_id"), "{err}");
    }
}
