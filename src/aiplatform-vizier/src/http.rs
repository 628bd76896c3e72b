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

//! The HTTP client shared by all the RPCs in the REST transport.

use auth::credentials::{CacheableResource, Credentials};
use bytes::Bytes;
use gax::Result;
use gax::error::{CredentialsError, Error};
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::{Extensions, HeaderMap, StatusCode};
use reqwest::header::{HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Sends JSON requests to the service endpoint.
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

/// The payload for requests without a body.
#[derive(Serialize)]
pub struct NoBody;

impl HttpClient {
    pub fn new(cred: Credentials, endpoint: String) -> Self {
        Self {
            inner: reqwest::Client::new(),
            cred,
            endpoint,
        }
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Starts a request for `path`, relative to the endpoint.
    pub fn request(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner.request(method, format!("{}{path}", self.endpoint))
    }

    /// Makes a single attempt and decodes the response.
    pub async fn send<I, O>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: Serialize,
        O: DeserializeOwned + Default,
    {
        let mut builder = builder.headers(self.auth_headers().await?);
        if let Some(agent) = options.user_agent() {
            let agent = HeaderValue::from_str(agent).map_err(Error::binding)?;
            builder = builder.header(USER_AGENT, agent);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(send_error)?;
        let status = response.status();
        let (parts, body) = http::Response::from(response).into_parts();
        let payload = http_body_util::BodyExt::collect(body)
            .await
            .map_err(Error::io)?
            .to_bytes();
        if !status.is_success() {
            return Err(service_error(status, parts.headers, payload));
        }
        decode(status, parts.headers, payload)
    }

    async fn auth_headers(&self) -> Result<HeaderMap> {
        let headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;
        match headers {
            CacheableResource::New { data, .. } => Ok(data),
            CacheableResource::NotModified => Err(Error::authentication(
                CredentialsError::from_msg(false, "credentials returned no headers"),
            )),
        }
    }
}

fn send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timeout(e)
    } else {
        Error::io(e)
    }
}

/// Converts an unsuccessful response into an error.
///
/// Payloads in the service error format keep their status. Anything else is
/// reported as a raw HTTP error.
fn service_error(status: StatusCode, headers: HeaderMap, payload: Bytes) -> Error {
    let code = status.as_u16();
    match gax::error::rpc::Status::try_from(&payload) {
        Ok(s) => Error::service_with_http_metadata(s, Some(code), Some(headers)),
        Err(_) => Error::http(code, headers, payload),
    }
}

/// Decodes a successful response.
///
/// A 204 response without content decodes as the default value.
fn decode<O>(status: StatusCode, headers: HeaderMap, payload: Bytes) -> Result<Response<O>>
where
    O: DeserializeOwned + Default,
{
    let body = if payload.is_empty() && status == StatusCode::NO_CONTENT {
        O::default()
    } else {
        serde_json::from_slice(&payload).map_err(Error::deser)?
    };
    Ok(Response::from_parts(Parts::new().set_headers(headers), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn raw_http_error() {
        let payload = Bytes::from_static(br#"{"error": "bad request"}"#);
        let err = service_error(StatusCode::BAD_REQUEST, json_headers(), payload.clone());
        assert_eq!(err.http_status_code(), Some(400));
        assert_eq!(err.http_headers(), Some(&json_headers()));
        assert_eq!(err.http_payload(), Some(&payload));
        assert!(err.status().is_none(), "{err:?}");
    }

    #[test]
    fn status_error() {
        let payload = serde_json::json!({"error": {
            "code": 404,
            "message": "study not found",
            "status": "NOT_FOUND",
        }});
        let err = service_error(
            StatusCode::NOT_FOUND,
            json_headers(),
            Bytes::from(payload.to_string()),
        );
        let status = err.status().cloned();
        assert_eq!(status.as_ref().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(
            status.as_ref().map(|s| s.message.as_str()),
            Some("study not found")
        );
        assert_eq!(err.http_status_code(), Some(404));
    }

    #[test_case(StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(StatusCode::NO_CONTENT, ""; "204 without content")]
    fn decode_empty(status: StatusCode, content: &'static str) -> TestResult {
        let got = decode::<wkt::Empty>(status, HeaderMap::new(), Bytes::from_static(content.as_bytes()))?;
        assert_eq!(got.into_body(), wkt::Empty::default());
        Ok(())
    }

    #[test]
    fn decode_missing_content() {
        let err = decode::<wkt::Empty>(StatusCode::OK, HeaderMap::new(), Bytes::new()).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn decode_keeps_headers() -> TestResult {
        let payload = Bytes::from_static(br#"{"name": "projects/p/locations/l/studies/s"}"#);
        let got = decode::<crate::model::Study>(StatusCode::OK, json_headers(), payload)?;
        assert_eq!(got.headers(), &json_headers());
        assert_eq!(got.body().name, "projects/p/locations/l/studies/s");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_user_agent() {
        let cred = auth::credentials::anonymous::Builder::new().build();
        let client = HttpClient::new(cred, "http://127.0.0.1:1".to_string());
        let mut options = RequestOptions::default();
        options.set_user_agent("bad\nagent");
        let builder = client.request(reqwest::Method::GET, "/v1beta1/projects/p".to_string());
        let err = client
            .send::<NoBody, wkt::Empty>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[test]
    fn request_url() -> TestResult {
        let cred = auth::credentials::anonymous::Builder::new().build();
        let client = HttpClient::new(cred, "https://aiplatform.googleapis.com:443".to_string());
        let request = client
            .request(reqwest::Method::GET, "/v1beta1/projects/p".to_string())
            .build()?;
        assert_eq!(
            request.url().as_str(),
            "https://aiplatform.googleapis.com/v1beta1/projects/p"
        );
        assert_eq!(client.endpoint(), "https://aiplatform.googleapis.com:443");
        Ok(())
    }
}
