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

//! Credential and scope resolution.
//!
//! Every transport resolves its credentials exactly once, when it is created.
//! The application may provide the credentials, name a file to load them
//! from, or let the transport find them in the environment using
//! [Application Default Credentials]. Providing both credentials and a file
//! is an error.
//!
//! [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc

use crate::client_builder::{Error, Result};
use crate::options::{AUTH_SCOPES, DEFAULT_HOST, TransportConfig};
use auth::credentials::Credentials;
use std::path::PathBuf;

/// The error type returned by [CredentialsLoader] implementations.
pub type LoadError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The scopes requested by the application and the service defaults.
///
/// The two sets are kept apart: some credential types, notably self-signed
/// JWTs, behave differently when the application did not request any scopes.
#[derive(Clone, Debug, PartialEq)]
pub struct ScopeSelection {
    pub requested: Option<Vec<String>>,
    pub defaults: &'static [&'static str],
}

impl ScopeSelection {
    /// Creates a selection with the service default scopes.
    pub fn new(requested: Option<Vec<String>>) -> Self {
        Self {
            requested,
            defaults: AUTH_SCOPES,
        }
    }

    /// The scopes to request: the application's, or the defaults if none.
    pub fn effective(&self) -> Vec<String> {
        match &self.requested {
            Some(s) => s.clone(),
            None => self.defaults.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Options for service account keys used as self-signed JWTs.
#[derive(Clone, Debug, PartialEq)]
pub struct SelfSignedJwtOptions {
    pub scopes: Option<Vec<String>>,
    pub default_scopes: &'static [&'static str],
    pub default_host: &'static str,
}

impl SelfSignedJwtOptions {
    pub fn new(scopes: Option<Vec<String>>) -> Self {
        Self {
            scopes,
            default_scopes: AUTH_SCOPES,
            default_host: DEFAULT_HOST,
        }
    }

    /// The JWT audience used when no scopes are requested.
    pub fn audience(&self) -> String {
        format!("https://{}/", self.default_host)
    }

    /// Returns true if the token should use the audience instead of scopes.
    pub fn use_audience(&self) -> bool {
        self.scopes.is_none()
    }

    pub fn scope_selection(&self) -> ScopeSelection {
        ScopeSelection {
            requested: self.scopes.clone(),
            defaults: self.default_scopes,
        }
    }
}

/// Loads credentials from files or from the environment.
///
/// The transports use [DefaultCredentialsLoader]. Applications may provide
/// their own implementation, typically in tests.
#[async_trait::async_trait]
pub trait CredentialsLoader: std::fmt::Debug + Send + Sync {
    /// Loads credentials from a JSON file.
    async fn load_from_file(
        &self,
        path: PathBuf,
        options: SelfSignedJwtOptions,
        quota_project_id: Option<String>,
    ) -> std::result::Result<Credentials, LoadError>;

    /// Finds the credentials in the environment.
    async fn load_default(
        &self,
        scopes: ScopeSelection,
        quota_project_id: Option<String>,
    ) -> std::result::Result<Credentials, LoadError>;
}

/// Resolves the credentials for a transport.
pub async fn resolve(config: &TransportConfig, loader: &dyn CredentialsLoader) -> Result<Credentials> {
    match (&config.credentials, &config.credentials_file) {
        (Some(_), Some(_)) => Err(Error::duplicate_credential_args()),
        (None, Some(path)) => {
            tracing::debug!("loading credentials from {path:?}");
            let options = SelfSignedJwtOptions::new(config.scopes.clone());
            loader
                .load_from_file(path.clone(), options, config.quota_project_id.clone())
                .await
                .map_err(|e| Error::credentials_file(path.clone(), e))
        }
        (Some(c), None) => Ok(c.clone()),
        (None, None) => {
            tracing::debug!("resolving default credentials");
            let scopes = ScopeSelection::new(config.scopes.clone());
            loader
                .load_default(scopes, config.quota_project_id.clone())
                .await
                .map_err(Error::default_credentials)
        }
    }
}

/// Loads credentials using `google-cloud-auth`.
#[derive(Clone, Debug, Default)]
pub struct DefaultCredentialsLoader;

#[async_trait::async_trait]
impl CredentialsLoader for DefaultCredentialsLoader {
    async fn load_from_file(
        &self,
        path: PathBuf,
        options: SelfSignedJwtOptions,
        quota_project_id: Option<String>,
    ) -> std::result::Result<Credentials, LoadError> {
        let contents = tokio::fs::read_to_string(&path).await?;
        let json = serde_json::from_str::<serde_json::Value>(&contents)?;
        from_json(json, options, quota_project_id)
    }

    async fn load_default(
        &self,
        scopes: ScopeSelection,
        quota_project_id: Option<String>,
    ) -> std::result::Result<Credentials, LoadError> {
        let mut builder = auth::credentials::Builder::default().with_scopes(scopes.effective());
        if let Some(q) = quota_project_id {
            builder = builder.with_quota_project_id(q);
        }
        Ok(builder.build()?)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum FileError {
    #[error("missing `type` field in credentials file")]
    MissingType,
    #[error("unsupported credentials type {0:?}")]
    UnsupportedType(String),
}

fn from_json(
    json: serde_json::Value,
    options: SelfSignedJwtOptions,
    quota_project_id: Option<String>,
) -> std::result::Result<Credentials, LoadError> {
    use auth::credentials::{external_account, impersonated, service_account, user_account};

    let scopes = options.scope_selection().effective();
    let kind = json
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(FileError::MissingType)?
        .to_string();
    let credentials = match kind.as_str() {
        "service_account" => {
            let access = if options.use_audience() {
                service_account::AccessSpecifier::from_audience(options.audience())
            } else {
                service_account::AccessSpecifier::from_scopes(scopes)
            };
            let mut builder = service_account::Builder::new(json).with_access_specifier(access);
            if let Some(q) = quota_project_id {
                builder = builder.with_quota_project_id(q);
            }
            builder.build()?
        }
        "authorized_user" => {
            let mut builder = user_account::Builder::new(json).with_scopes(scopes);
            if let Some(q) = quota_project_id {
                builder = builder.with_quota_project_id(q);
            }
            builder.build()?
        }
        "impersonated_service_account" => {
            let mut builder = impersonated::Builder::new(json).with_scopes(scopes);
            if let Some(q) = quota_project_id {
                builder = builder.with_quota_project_id(q);
            }
            builder.build()?
        }
        "external_account" => {
            let mut builder = external_account::Builder::new(json).with_scopes(scopes);
            if let Some(q) = quota_project_id {
                builder = builder.with_quota_project_id(q);
            }
            builder.build()?
        }
        _ => return Err(FileError::UnsupportedType(kind).into()),
    };
    Ok(credentials)
}
