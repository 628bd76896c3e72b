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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the host or the authentication
//! credentials. The types in this module implement the client builder.
//!
//! Applications should not create builders directly, instead use
//! [VizierService::builder()][crate::client::VizierService::builder].
//!
//! ## Example: create a client with the default configuration.
//!
//! ```no_run
//! # use google_cloud_aiplatform_vizier_v1beta1::client::VizierService;
//! # tokio_test::block_on(async {
//! let client = VizierService::builder().build().await?;
//! # google_cloud_aiplatform_vizier_v1beta1::client_builder::Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client for a locational endpoint.
//!
//! ```no_run
//! # use google_cloud_aiplatform_vizier_v1beta1::client::VizierService;
//! # tokio_test::block_on(async {
//! let client = VizierService::builder()
//!     .with_endpoint("us-central1-aiplatform.googleapis.com")
//!     .build()
//!     .await?;
//! # google_cloud_aiplatform_vizier_v1beta1::client_builder::Result::<()>::Ok(()) });
//! ```

use crate::credentials::{CredentialsLoader, DefaultCredentialsLoader};
use crate::options::{ClientInfo, TransportConfig};
use auth::credentials::Credentials;
use std::path::PathBuf;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use google_cloud_aiplatform_vizier_v1beta1::client::VizierService;
/// # tokio_test::block_on(async {
/// use auth::credentials::anonymous::Builder;
/// let result = VizierService::builder()
///     .with_credentials(Builder::new().build())
///     .with_credentials_file("/etc/my-service-account.json")
///     .build()
///     .await;
/// let err = result.unwrap_err();
/// assert!(err.is_duplicate_credential_args(), "{err:?}");
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// Both inline credentials and a credentials file were configured.
    pub fn is_duplicate_credential_args(&self) -> bool {
        matches!(&self.0, ErrorKind::DuplicateCredentialArgs)
    }

    /// The default credentials could not be resolved from the environment.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// The configured credentials file could not be loaded.
    pub fn is_credentials_file(&self) -> bool {
        matches!(&self.0, ErrorKind::CredentialsFile(_, _))
    }

    /// The transport could not be initialized.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    pub(crate) fn duplicate_credential_args() -> Self {
        Self(ErrorKind::DuplicateCredentialArgs)
    }

    pub(crate) fn default_credentials<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    pub(crate) fn credentials_file<T: Into<BoxError>>(path: PathBuf, source: T) -> Self {
        Self(ErrorKind::CredentialsFile(path, source.into()))
    }

    pub(crate) fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("'credentials_file' and 'credentials' are mutually exclusive")]
    DuplicateCredentialArgs,
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not load credentials from {0:?}")]
    CredentialsFile(PathBuf, #[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

/// A builder for [VizierService][crate::client::VizierService].
///
/// The default configuration should work for most applications. Use the
/// `with_*` functions to change it.
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    config: TransportConfig,
    loader: Arc<dyn CredentialsLoader>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            config: TransportConfig::default(),
            loader: Arc::new(DefaultCredentialsLoader),
        }
    }
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a new client.
    ///
    /// This resolves the credentials, failing if the configuration is invalid
    /// or if the default credentials cannot be found.
    pub async fn build(self) -> Result<crate::client::VizierService> {
        crate::client::VizierService::new(self.config, self.loader).await
    }

    /// Sets the host used by the client.
    ///
    /// The port defaults to `443` when `v` does not include one. Use a
    /// scheme-qualified value, such as `http://localhost:8080`, to connect to
    /// emulators or test servers.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.host = v.into();
        self
    }

    /// An alias for [with_endpoint()][Self::with_endpoint].
    pub fn with_host<V: Into<String>>(self, v: V) -> Self {
        self.with_endpoint(v)
    }

    /// Enables tracing for every request.
    ///
    /// Tracing can also be enabled by setting the `GOOGLE_CLOUD_RUST_LOGGING`
    /// environment variable to `true`.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Sets the credentials used by the client.
    ///
    /// Mutually exclusive with [with_credentials_file()][Self::with_credentials_file].
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.credentials = Some(v.into());
        self
    }

    /// Loads the credentials from a JSON file.
    ///
    /// Mutually exclusive with [with_credentials()][Self::with_credentials].
    pub fn with_credentials_file<P: Into<PathBuf>>(mut self, v: P) -> Self {
        self.config.credentials_file = Some(v.into());
        self
    }

    /// Requests specific OAuth2 scopes.
    ///
    /// Only used when the client loads the credentials itself.
    pub fn with_scopes<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.scopes = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the project used for quota and billing.
    ///
    /// Only used when the client loads the credentials itself.
    pub fn with_quota_project_id<V: Into<String>>(mut self, v: V) -> Self {
        self.config.quota_project_id = Some(v.into());
        self
    }

    /// Replaces the client information sent in the telemetry headers.
    pub fn with_client_info(mut self, v: ClientInfo) -> Self {
        self.config.client_info = v;
        self
    }

    /// Sets the `user-agent` header for requests that do not override it.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.client_info.user_agent = Some(v.into());
        self
    }

    /// Replaces the component used to load credentials.
    ///
    /// Mostly useful in tests, where the application does not want to read
    /// files or query the environment.
    pub fn with_credentials_loader<L: CredentialsLoader + 'static>(mut self, v: L) -> Self {
        self.loader = Arc::new(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn defaults() {
        let builder = ClientBuilder::new();
        assert_eq!(builder.config.host, crate::options::DEFAULT_HOST);
        assert!(builder.config.credentials.is_none());
        assert!(!builder.config.tracing);
    }

    #[test]
    fn setters() {
        let builder = ClientBuilder::new()
            .with_endpoint("localhost:7469")
            .with_tracing()
            .with_credentials_file("/tmp/creds.json")
            .with_scopes(["scope-1", "scope-2"])
            .with_quota_project_id("my-quota-project")
            .with_user_agent("my-app/1.0");
        let config = builder.config;
        assert_eq!(config.host, "localhost:7469");
        assert!(config.tracing);
        assert_eq!(config.credentials_file, Some(PathBuf::from("/tmp/creds.json")));
        assert_eq!(
            config.scopes,
            Some(vec!["scope-1".to_string(), "scope-2".to_string()])
        );
        assert_eq!(config.quota_project_id.as_deref(), Some("my-quota-project"));
        assert_eq!(config.client_info.user_agent.as_deref(), Some("my-app/1.0"));
    }

    #[test]
    fn host_alias() {
        let builder = ClientBuilder::new().with_host("localhost:1234");
        assert_eq!(builder.config.host, "localhost:1234");
    }

    #[test]
    fn errors() {
        let e = Error::duplicate_credential_args();
        assert!(e.is_duplicate_credential_args(), "{e:?}");
        assert!(e.to_string().contains("mutually exclusive"), "{e}");

        let e = Error::default_credentials("no credentials");
        assert!(e.is_default_credentials(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");

        let e = Error::credentials_file(PathBuf::from("/bad/path.json"), "not found");
        assert!(e.is_credentials_file(), "{e:?}");
        assert!(e.to_string().contains("/bad/path.json"), "{e}");

        let e = Error::transport("cannot create client");
        assert!(e.is_transport(), "{e:?}");
    }
}
