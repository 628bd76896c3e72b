// Copyright 2025 Google LLC
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
    use auth::credentials::Credentials;
    use auth::credentials::anonymous::Builder as Anonymous;
    use google_cloud_aiplatform_vizier_v1beta1 as vizier;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::path::PathBuf;
    use vizier::client::VizierService;
    use vizier::credentials::{CredentialsLoader, LoadError, ScopeSelection, SelfSignedJwtOptions};

    mockall::mock! {
        #[derive(Debug)]
        Loader {}

        #[async_trait::async_trait]
        impl CredentialsLoader for Loader {
            async fn load_from_file(
                &self,
                path: PathBuf,
                options: SelfSignedJwtOptions,
                quota_project_id: Option<String>,
            ) -> Result<Credentials, LoadError>;
            async fn load_default(
                &self,
                scopes: ScopeSelection,
                quota_project_id: Option<String>,
            ) -> Result<Credentials, LoadError>;
        }
    }

    #[tokio::test]
    async fn duplicate_credential_args() {
        let mut loader = MockLoader::new();
        loader.expect_load_from_file().never();
        loader.expect_load_default().never();
        let err = VizierService::builder()
            .with_credentials(Anonymous::new().build())
            .with_credentials_file("/does/not/exist.json")
            .with_credentials_loader(loader)
            .build()
            .await
            .unwrap_err();
        assert!(err.is_duplicate_credential_args(), "{err:?}");
    }

    #[tokio::test]
    async fn ambient_credentials_with_scopes() -> anyhow::Result<()> {
        let mut loader = MockLoader::new();
        loader.expect_load_from_file().never();
        loader
            .expect_load_default()
            .times(1)
            .withf(|scopes, quota| {
                scopes.effective() == vec!["scope-a".to_string()]
                    && quota.as_deref() == Some("my-quota-project")
            })
            .returning(|_, _| Ok(Anonymous::new().build()));
        let _client = VizierService::builder()
            .with_scopes(["scope-a"])
            .with_quota_project_id("my-quota-project")
            .with_credentials_loader(loader)
            .build()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn credentials_file() -> anyhow::Result<()> {
        let mut loader = MockLoader::new();
        loader
            .expect_load_from_file()
            .times(1)
            .withf(|path, options, _| {
                path == &PathBuf::from("/etc/creds.json") && options.use_audience()
            })
            .returning(|_, _, _| Ok(Anonymous::new().build()));
        loader.expect_load_default().never();
        let _client = VizierService::builder()
            .with_credentials_file("/etc/creds.json")
            .with_credentials_loader(loader)
            .build()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn credentials_file_error() {
        let mut loader = MockLoader::new();
        loader
            .expect_load_from_file()
            .times(1)
            .returning(|_, _, _| Err("cannot parse".into()));
        let err = VizierService::builder()
            .with_credentials_file("/etc/creds.json")
            .with_credentials_loader(loader)
            .build()
            .await
            .unwrap_err();
        assert!(err.is_credentials_file(), "{err:?}");
    }

    #[tokio::test]
    async fn default_credentials_error() {
        let mut loader = MockLoader::new();
        loader
            .expect_load_default()
            .times(1)
            .returning(|_, _| Err("no credentials".into()));
        let err = VizierService::builder()
            .with_credentials_loader(loader)
            .build()
            .await
            .unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
    }

    #[tokio::test]
    async fn loaded_credentials_are_used() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path("/v1beta1/projects/p/locations/l/studies/s"),
            ])
            .respond_with(json_encoded(json!({"name": "projects/p/locations/l/studies/s"}))),
        );

        let mut loader = MockLoader::new();
        loader
            .expect_load_default()
            .times(1)
            .returning(|_, _| Ok(Anonymous::new().build()));
        let endpoint = server.url("/").to_string();
        let client = VizierService::builder()
            .with_endpoint(endpoint.trim_end_matches('/'))
            .with_credentials_loader(loader)
            .build()
            .await?;
        let study = client
            .get_study("projects/p/locations/l/studies/s")
            .send()
            .await?;
        assert_eq!(study.name, "projects/p/locations/l/studies/s");
        Ok(())
    }
}
