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

//! Transport configuration shared by all the Vizier transports.
//!
//! Applications rarely use these types directly. They are populated by
//! [ClientBuilder][crate::client_builder::ClientBuilder] and consumed when the
//! transport is created.

use auth::credentials::Credentials;
use std::path::PathBuf;

/// The default host for the Vertex AI API.
pub const DEFAULT_HOST: &str = "aiplatform.googleapis.com";

/// The port appended to hosts that do not specify one.
pub const DEFAULT_PORT: u16 = 443;

/// The OAuth2 scopes used when the application does not request any.
pub const AUTH_SCOPES: &[&str] = &["https://www.googleapis.com/auth/cloud-platform"];

pub(crate) const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

lazy_static::lazy_static! {
    /// The client information used when the application does not set any.
    pub static ref DEFAULT_CLIENT_INFO: ClientInfo = ClientInfo::default();
}

/// Describes the client library in the telemetry headers.
///
/// Generally, you only need to change this if you are developing your own
/// client library on top of this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientInfo {
    /// The version reported in the `x-goog-api-client` header.
    pub gapic_version: String,
    /// An optional prefix for the `user-agent` header.
    pub user_agent: Option<String>,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            gapic_version: env!("CARGO_PKG_VERSION").to_string(),
            user_agent: None,
        }
    }
}

impl ClientInfo {
    /// Sets the version reported in the `x-goog-api-client` header.
    pub fn set_gapic_version<T: Into<String>>(mut self, v: T) -> Self {
        self.gapic_version = v.into();
        self
    }

    /// Sets the `user-agent` prefix.
    pub fn set_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent = Some(v.into());
        self
    }

    /// The value for the `x-goog-api-client` header.
    pub fn api_client_header(&self) -> String {
        crate::api_header::header_value(&self.gapic_version)
    }
}

/// The configuration captured when a transport is constructed.
#[derive(Clone, Debug)]
pub struct TransportConfig {
    pub host: String,
    pub credentials: Option<Credentials>,
    pub credentials_file: Option<PathBuf>,
    pub scopes: Option<Vec<String>>,
    pub quota_project_id: Option<String>,
    pub client_info: ClientInfo,
    pub tracing: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            credentials: None,
            credentials_file: None,
            scopes: None,
            quota_project_id: None,
            client_info: DEFAULT_CLIENT_INFO.clone(),
            tracing: false,
        }
    }
}

/// Appends the default port to `host` unless it already has a `:`.
///
/// # Example
/// ```
/// # use google_cloud_aiplatform_vizier_v1beta1::options::normalize_host;
/// assert_eq!(normalize_host("aiplatform.googleapis.com"), "aiplatform.googleapis.com:443");
/// assert_eq!(normalize_host("localhost:8080"), "localhost:8080");
/// ```
pub fn normalize_host(host: &str) -> String {
    if host.contains(':') {
        return host.to_string();
    }
    format!("{host}:{DEFAULT_PORT}")
}

/// Returns the URL origin used to send requests to `host`.
///
/// Hosts with an explicit scheme, such as `http://localhost:8080`, are used
/// as-is. Any other host is reached over HTTPS.
pub fn endpoint_origin(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.contains("://") {
        return host.to_string();
    }
    format!("https://{host}")
}

// Returns true if the environment or transport configuration enables tracing.
pub(crate) fn tracing_enabled(config: &TransportConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}
