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

#[cfg(test)]
mod tests {
    use platform_services_globalcatalog_v1 as globalcatalog;
    use globalcatalog::model::{CatalogEntry, PricingGet, SearchResult, Visibility};
    use globalcatalog::options::*;
    use globalcatalog::{Error, Response, Result};
    use sdk::error::ServiceError;
    use sdk::options::RequestOptions;

    mockall::mock! {
        #[derive(Debug)]
        GlobalCatalog {}
        impl globalcatalog::stub::GlobalCatalog for GlobalCatalog {
            async fn list_catalog_entries(
                &self,
                req: ListCatalogEntriesOptions,
                options: RequestOptions,
            ) -> Result<Response<SearchResult>>;
            async fn get_catalog_entry(
                &self,
                req: GetCatalogEntryOptions,
                options: RequestOptions,
            ) -> Result<Response<CatalogEntry>>;
            async fn delete_catalog_entry(
                &self,
                req: DeleteCatalogEntryOptions,
                options: RequestOptions,
            ) -> Result<Response<()>>;
            async fn get_visibility(
                &self,
                req: GetVisibilityOptions,
                options: RequestOptions,
            ) -> Result<Response<Visibility>>;
            async fn get_pricing(
                &self,
                req: GetPricingOptions,
                options: RequestOptions,
            ) -> Result<Response<PricingGet>>;
        }
    }

    #[tokio::test]
    async fn mock_get_catalog_entry() -> anyhow::Result<()> {
        let mut mock = MockGlobalCatalog::new();
        mock.expect_get_catalog_entry()
            .withf(|req, options| {
                req.id == "svc1"
                    && options.headers() == [("x-test".to_string(), "value".to_string())]
            })
            .return_once(|_, _| {
                Ok(Response::from(CatalogEntry {
                    id: Some("svc1".into()),
                    name: "n".into(),
                    ..Default::default()
                }))
            });

        let client = globalcatalog::client::GlobalCatalog::from_stub(mock);
        let mut options = GetCatalogEntryOptions::new("svc1");
        options.headers.insert("x-test".into(), "value".into());
        let entry = client.get_catalog_entry(options).await?.into_body();
        assert_eq!(entry.id.as_deref(), Some("svc1"));
        assert_eq!(entry.name, "n");
        Ok(())
    }

    #[tokio::test]
    async fn mock_service_error() {
        let mut mock = MockGlobalCatalog::new();
        mock.expect_delete_catalog_entry().return_once(|_, _| {
            Err(Error::service(
                ServiceError::new("forbidden").set_code("forbidden"),
                403,
                http::HeaderMap::new(),
            ))
        });

        let client = globalcatalog::client::GlobalCatalog::from_stub(mock);
        let err = client
            .delete_catalog_entry(DeleteCatalogEntryOptions::new("svc1"))
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(403));
        assert_eq!(err.service_error().map(|e| e.message()), Some("forbidden"));
    }

    #[tokio::test]
    async fn mock_list_catalog_entries() -> anyhow::Result<()> {
        let mut mock = MockGlobalCatalog::new();
        mock.expect_list_catalog_entries()
            .withf(|req, _| req.q.as_deref() == Some("kind:service"))
            .times(2)
            .returning(|_, _| {
                Ok(Response::from(SearchResult {
                    page: Some("1".to_string()),
                    resources: Some(Vec::new()),
                    ..Default::default()
                }))
            });

        let client = globalcatalog::client::GlobalCatalog::from_stub(mock);
        let clone = client.clone();
        for c in [client, clone] {
            let mut options = ListCatalogEntriesOptions::new();
            options.q = Some("kind:service".into());
            let result = c.list_catalog_entries(options).await?.into_body();
            assert_eq!(result.page.as_deref(), Some("1"));
            assert!(result.entries()?.is_empty());
        }
        Ok(())
    }

    #[derive(Debug)]
    struct Empty;
    impl globalcatalog::stub::GlobalCatalog for Empty {}

    #[tokio::test]
    #[should_panic]
    async fn unimplemented_stub_panics() {
        let client = globalcatalog::client::GlobalCatalog::from_stub(Empty);
        let _ = client.get_pricing(GetPricingOptions::new("svc1")).await;
    }
}
