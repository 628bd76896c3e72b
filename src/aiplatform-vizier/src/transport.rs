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

//! The REST transport for the Vizier service.

use crate::Result;
use crate::client_builder;
use crate::credentials::CredentialsLoader;
use crate::http::{HttpClient, NoBody};
use crate::options::{TransportConfig, endpoint_origin, normalize_host};
use crate::path_template::{self as pt, bind, bind_any};
use crate::wrapped_methods::{Method, WrappedMethods, prep_wrapped_methods};
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::Response;
use reqwest::header::HeaderValue;

/// Implements [VizierService](super::stub::VizierService) using an [HttpClient].
#[derive(Clone, Debug)]
pub struct VizierService {
    inner: HttpClient,
    wrapped: WrappedMethods,
    api_client: HeaderValue,
}

impl VizierService {
    pub async fn new(
        config: TransportConfig,
        loader: &dyn CredentialsLoader,
    ) -> client_builder::Result<Self> {
        let cred = crate::credentials::resolve(&config, loader).await?;
        let host = normalize_host(&config.host);
        let endpoint = endpoint_origin(&host);
        tracing::debug!("sending requests to {endpoint}");
        let api_client = HeaderValue::from_str(&config.client_info.api_client_header())
            .map_err(client_builder::Error::transport)?;
        Ok(Self {
            inner: HttpClient::new(cred, endpoint),
            wrapped: prep_wrapped_methods(&config.client_info),
            api_client,
        })
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: String,
        param: (&str, &str),
    ) -> reqwest::RequestBuilder {
        self.inner
            .request(method, path)
            .header("x-goog-api-client", self.api_client.clone())
            .header("x-goog-request-params", pt::format(param))
    }
}

fn with_page(builder: reqwest::RequestBuilder, token: &str, size: i32) -> reqwest::RequestBuilder {
    let builder = if token.is_empty() {
        builder
    } else {
        builder.query(&[("pageToken", token)])
    };
    if size == 0 {
        builder
    } else {
        builder.query(&[("pageSize", size)])
    }
}

impl super::stub::VizierService for VizierService {
    async fn create_study(
        &self,
        req: crate::model::CreateStudyRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Study>> {
        let options = self.wrapped.apply(Method::CreateStudy, options);
        let parent = bind("parent", &req.parent, pt::LOCATION)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{parent}/studies"),
            ("parent", parent),
        );
        self.inner.send(builder, req.study, options).await
    }

    async fn get_study(
        &self,
        req: crate::model::GetStudyRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Study>> {
        let options = self.wrapped.apply(Method::GetStudy, options);
        let name = bind("name", &req.name, pt::STUDY)?;
        let builder = self.request(reqwest::Method::GET, format!("/v1beta1/{name}"), ("name", name));
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn list_studies(
        &self,
        req: crate::model::ListStudiesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListStudiesResponse>> {
        let options = self.wrapped.apply(Method::ListStudies, options);
        let parent = bind("parent", &req.parent, pt::LOCATION)?;
        let builder = self.request(
            reqwest::Method::GET,
            format!("/v1beta1/{parent}/studies"),
            ("parent", parent),
        );
        let builder = with_page(builder, &req.page_token, req.page_size);
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn delete_study(
        &self,
        req: crate::model::DeleteStudyRequest,
        options: RequestOptions,
    ) -> Result<Response<wkt::Empty>> {
        let options = self.wrapped.apply(Method::DeleteStudy, options);
        let name = bind("name", &req.name, pt::STUDY)?;
        let builder = self.request(
            reqwest::Method::DELETE,
            format!("/v1beta1/{name}"),
            ("name", name),
        );
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn lookup_study(
        &self,
        req: crate::model::LookupStudyRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Study>> {
        let options = self.wrapped.apply(Method::LookupStudy, options);
        let parent = bind("parent", &req.parent, pt::LOCATION)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{parent}/studies:lookup"),
            ("parent", parent),
        );
        self.inner.send(builder, Some(req), options).await
    }

    async fn suggest_trials(
        &self,
        req: crate::model::SuggestTrialsRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let options = self.wrapped.apply(Method::SuggestTrials, options);
        let parent = bind("parent", &req.parent, pt::STUDY)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{parent}/trials:suggest"),
            ("parent", parent),
        );
        self.inner.send(builder, Some(req), options).await
    }

    async fn create_trial(
        &self,
        req: crate::model::CreateTrialRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Trial>> {
        let options = self.wrapped.apply(Method::CreateTrial, options);
        let parent = bind("parent", &req.parent, pt::STUDY)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{parent}/trials"),
            ("parent", parent),
        );
        self.inner.send(builder, req.trial, options).await
    }

    async fn get_trial(
        &self,
        req: crate::model::GetTrialRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Trial>> {
        let options = self.wrapped.apply(Method::GetTrial, options);
        let name = bind("name", &req.name, pt::TRIAL)?;
        let builder = self.request(reqwest::Method::GET, format!("/v1beta1/{name}"), ("name", name));
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn list_trials(
        &self,
        req: crate::model::ListTrialsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListTrialsResponse>> {
        let options = self.wrapped.apply(Method::ListTrials, options);
        let parent = bind("parent", &req.parent, pt::STUDY)?;
        let builder = self.request(
            reqwest::Method::GET,
            format!("/v1beta1/{parent}/trials"),
            ("parent", parent),
        );
        let builder = with_page(builder, &req.page_token, req.page_size);
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn add_trial_measurement(
        &self,
        req: crate::model::AddTrialMeasurementRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Trial>> {
        let options = self.wrapped.apply(Method::AddTrialMeasurement, options);
        let trial_name = bind("trial_name", &req.trial_name, pt::TRIAL)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{trial_name}:addTrialMeasurement"),
            ("trial_name", trial_name),
        );
        self.inner.send(builder, Some(req), options).await
    }

    async fn complete_trial(
        &self,
        req: crate::model::CompleteTrialRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Trial>> {
        let options = self.wrapped.apply(Method::CompleteTrial, options);
        let name = bind("name", &req.name, pt::TRIAL)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{name}:complete"),
            ("name", name),
        );
        self.inner.send(builder, Some(req), options).await
    }

    async fn delete_trial(
        &self,
        req: crate::model::DeleteTrialRequest,
        options: RequestOptions,
    ) -> Result<Response<wkt::Empty>> {
        let options = self.wrapped.apply(Method::DeleteTrial, options);
        let name = bind("name", &req.name, pt::TRIAL)?;
        let builder = self.request(
            reqwest::Method::DELETE,
            format!("/v1beta1/{name}"),
            ("name", name),
        );
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn check_trial_early_stopping_state(
        &self,
        req: crate::model::CheckTrialEarlyStoppingStateRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let options = self
            .wrapped
            .apply(Method::CheckTrialEarlyStoppingState, options);
        let trial_name = bind("trial_name", &req.trial_name, pt::TRIAL)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{trial_name}:checkTrialEarlyStoppingState"),
            ("trial_name", trial_name),
        );
        self.inner.send(builder, Some(req), options).await
    }

    async fn stop_trial(
        &self,
        req: crate::model::StopTrialRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Trial>> {
        let options = self.wrapped.apply(Method::StopTrial, options);
        let name = bind("name", &req.name, pt::TRIAL)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{name}:stop"),
            ("name", name),
        );
        self.inner.send(builder, Some(req), options).await
    }

    async fn list_optimal_trials(
        &self,
        req: crate::model::ListOptimalTrialsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ListOptimalTrialsResponse>> {
        let options = self.wrapped.apply(Method::ListOptimalTrials, options);
        let parent = bind("parent", &req.parent, pt::STUDY)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{parent}/trials:listOptimalTrials"),
            ("parent", parent),
        );
        self.inner.send(builder, Some(req), options).await
    }

    async fn list_operations(
        &self,
        req: longrunning::model::ListOperationsRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::ListOperationsResponse>> {
        let name = bind_any("name", &req.name, pt::OPERATIONS_PARENT)?;
        let builder = self.request(
            reqwest::Method::GET,
            format!("/v1beta1/{name}/operations"),
            ("name", name),
        );
        let builder = if req.filter.is_empty() {
            builder
        } else {
            builder.query(&[("filter", &req.filter)])
        };
        let builder = with_page(builder, &req.page_token, req.page_size);
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let name = bind_any("name", &req.name, pt::ANY_OPERATION)?;
        let builder = self.request(reqwest::Method::GET, format!("/v1beta1/{name}"), ("name", name));
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> Result<Response<wkt::Empty>> {
        let name = bind_any("name", &req.name, pt::ANY_OPERATION)?;
        let builder = self.request(
            reqwest::Method::DELETE,
            format!("/v1beta1/{name}"),
            ("name", name),
        );
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<Response<wkt::Empty>> {
        let name = bind_any("name", &req.name, pt::ANY_OPERATION)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{name}:cancel"),
            ("name", name),
        );
        self.inner.send(builder, None::<NoBody>, options).await
    }

    async fn wait_operation(
        &self,
        req: longrunning::model::WaitOperationRequest,
        options: RequestOptions,
    ) -> Result<Response<longrunning::model::Operation>> {
        let name = bind_any("name", &req.name, pt::ANY_OPERATION)?;
        let builder = self.request(
            reqwest::Method::POST,
            format!("/v1beta1/{name}:wait"),
            ("name", name),
        );
        // Durations use their JSON representation in query parameters, e.g. `1.5s`.
        let builder = match &req.timeout {
            None => builder,
            Some(t) => {
                let value = serde_json::to_value(t).map_err(Error::ser)?;
                match value.as_str() {
                    Some(s) => builder.query(&[("timeout", s)]),
                    None => builder,
                }
            }
        };
        self.inner.send(builder, None::<NoBody>, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::DefaultCredentialsLoader;
    use crate::wrapped_methods::DEFAULT_TIMEOUT;
    use auth::credentials::anonymous::Builder as Anonymous;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn config(host: &str) -> TransportConfig {
        TransportConfig {
            host: host.to_string(),
            credentials: Some(Anonymous::new().build()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn default_host() -> TestResult {
        let transport =
            VizierService::new(config(crate::options::DEFAULT_HOST), &DefaultCredentialsLoader).await?;
        assert_eq!(
            transport.inner.endpoint(),
            "https://aiplatform.googleapis.com:443"
        );
        Ok(())
    }

    #[tokio::test]
    async fn host_with_port() -> TestResult {
        let transport =
            VizierService::new(config("localhost:7469"), &DefaultCredentialsLoader).await?;
        assert_eq!(transport.inner.endpoint(), "https://localhost:7469");
        Ok(())
    }

    #[tokio::test]
    async fn wrapped_methods() -> TestResult {
        let transport =
            VizierService::new(config("localhost:7469"), &DefaultCredentialsLoader).await?;
        let wrapped = &transport.wrapped;
        assert_eq!(wrapped.len(), Method::ALL.len());
        for m in Method::ALL {
            let w = wrapped.get(m).unwrap();
            assert_eq!(w.default_timeout, DEFAULT_TIMEOUT, "{m}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_credentials() {
        let mut config = config("localhost:7469");
        config.credentials_file = Some("/does/not/matter.json".into());
        let err = VizierService::new(config, &DefaultCredentialsLoader)
            .await
            .unwrap_err();
        assert!(err.is_duplicate_credential_args(), "{err:?}");
    }

    async fn call(transport: &VizierService, method: Method) -> Result<()> {
        use crate::model::*;
        use crate::stub::VizierService as _;
        const LOCATION: &str = "projects/p/locations/l";
        const STUDY: &str = "projects/p/locations/l/studies/s";
        const TRIAL: &str = "projects/p/locations/l/studies/s/trials/1";
        let o = RequestOptions::default();
        match method {
            Method::CreateStudy => {
                let req = CreateStudyRequest::new().set_parent(LOCATION);
                transport.create_study(req, o).await.map(|_| ())
            }
            Method::GetStudy => {
                let req = GetStudyRequest::new().set_name(STUDY);
                transport.get_study(req, o).await.map(|_| ())
            }
            Method::ListStudies => {
                let req = ListStudiesRequest::new().set_parent(LOCATION);
                transport.list_studies(req, o).await.map(|_| ())
            }
            Method::DeleteStudy => {
                let req = DeleteStudyRequest::new().set_name(STUDY);
                transport.delete_study(req, o).await.map(|_| ())
            }
            Method::LookupStudy => {
                let req = LookupStudyRequest::new().set_parent(LOCATION);
                transport.lookup_study(req, o).await.map(|_| ())
            }
            Method::SuggestTrials => {
                let req = SuggestTrialsRequest::new().set_parent(STUDY);
                transport.suggest_trials(req, o).await.map(|_| ())
            }
            Method::CreateTrial => {
                let req = CreateTrialRequest::new().set_parent(STUDY);
                transport.create_trial(req, o).await.map(|_| ())
            }
            Method::GetTrial => {
                let req = GetTrialRequest::new().set_name(TRIAL);
                transport.get_trial(req, o).await.map(|_| ())
            }
            Method::ListTrials => {
                let req = ListTrialsRequest::new().set_parent(STUDY);
                transport.list_trials(req, o).await.map(|_| ())
            }
            Method::AddTrialMeasurement => {
                let req = AddTrialMeasurementRequest::new().set_trial_name(TRIAL);
                transport.add_trial_measurement(req, o).await.map(|_| ())
            }
            Method::CompleteTrial => {
                let req = CompleteTrialRequest::new().set_name(TRIAL);
                transport.complete_trial(req, o).await.map(|_| ())
            }
            Method::DeleteTrial => {
                let req = DeleteTrialRequest::new().set_name(TRIAL);
                transport.delete_trial(req, o).await.map(|_| ())
            }
            Method::CheckTrialEarlyStoppingState => {
                let req = CheckTrialEarlyStoppingStateRequest::new().set_trial_name(TRIAL);
                transport
                    .check_trial_early_stopping_state(req, o)
                    .await
                    .map(|_| ())
            }
            Method::StopTrial => {
                let req = StopTrialRequest::new().set_name(TRIAL);
                transport.stop_trial(req, o).await.map(|_| ())
            }
            Method::ListOptimalTrials => {
                let req = ListOptimalTrialsRequest::new().set_parent(STUDY);
                transport.list_optimal_trials(req, o).await.map(|_| ())
            }
        }
    }

    // Only `method` gets a short default, so a call that applies the defaults
    // of any other RPC, or none at all, outlives the server delay.
    #[test_case(Method::CreateStudy)]
    #[test_case(Method::GetStudy)]
    #[test_case(Method::ListStudies)]
    #[test_case(Method::DeleteStudy)]
    #[test_case(Method::LookupStudy)]
    #[test_case(Method::SuggestTrials)]
    #[test_case(Method::CreateTrial)]
    #[test_case(Method::GetTrial)]
    #[test_case(Method::ListTrials)]
    #[test_case(Method::AddTrialMeasurement)]
    #[test_case(Method::CompleteTrial)]
    #[test_case(Method::DeleteTrial)]
    #[test_case(Method::CheckTrialEarlyStoppingState)]
    #[test_case(Method::StopTrial)]
    #[test_case(Method::ListOptimalTrials)]
    #[tokio::test]
    async fn applies_default_timeout(method: Method) -> TestResult {
        use httptest::{Expectation, Server, matchers::any, responders::*};
        let server = Server::run();
        server.expect(
            Expectation::matching(any())
                .times(1)
                .respond_with(delay_and_then(
                    std::time::Duration::from_secs(1),
                    json_encoded(serde_json::json!({})),
                )),
        );
        let endpoint = server.url("/").to_string();
        let mut transport = VizierService::new(
            config(endpoint.trim_end_matches('/')),
            &DefaultCredentialsLoader,
        )
        .await?;
        transport.wrapped = Method::ALL.into_iter().fold(transport.wrapped.clone(), |w, m| {
            let timeout = if m == method {
                std::time::Duration::from_millis(100)
            } else {
                std::time::Duration::from_secs(30)
            };
            w.with_default_timeout(m, timeout)
        });

        let err = call(&transport, method).await.unwrap_err();
        assert!(err.is_timeout(), "{method}: {err:?}");
        Ok(())
    }
}
