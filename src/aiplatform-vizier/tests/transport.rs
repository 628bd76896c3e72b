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
    use gax::options::RequestOptionsBuilder;
    use google_cloud_aiplatform_vizier_v1beta1 as vizier;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::error::Error as _;
    use std::time::Duration;
    use vizier::client::VizierService;
    use vizier::model;
    type Result = anyhow::Result<()>;

    const LOCATION: &str = "projects/p/locations/us-central1";
    const STUDY: &str = "projects/p/locations/us-central1/studies/s";
    const TRIAL: &str = "projects/p/locations/us-central1/studies/s/trials/1";

    async fn client(server: &Server) -> anyhow::Result<VizierService> {
        let endpoint = server.url("/").to_string();
        let endpoint = endpoint.trim_end_matches('/');
        let client = VizierService::builder()
            .with_endpoint(endpoint)
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn create_study() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{LOCATION}/studies"))),
                request::headers(contains((eq("x-goog-request-params"), eq(format!("parent={LOCATION}"))))),
                request::headers(contains(key("x-goog-api-client"))),
                request::body(json_decoded(eq(json!({"displayName": "tune-lr"})))),
            ])
            .respond_with(json_encoded(json!({
                "name": STUDY,
                "displayName": "tune-lr",
                "state": "ACTIVE",
            }))),
        );

        let client = client(&server).await?;
        let study = client
            .create_study(LOCATION)
            .set_study(model::Study::new().set_display_name("tune-lr"))
            .send()
            .await?;
        assert_eq!(study.name, STUDY);
        assert_eq!(study.state, model::study::State::Active);
        Ok(())
    }

    #[tokio::test]
    async fn get_study() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{STUDY}"))),
                request::headers(contains((eq("x-goog-request-params"), eq(format!("name={STUDY}"))))),
            ])
            .respond_with(json_encoded(json!({"name": STUDY}))),
        );

        let client = client(&server).await?;
        let study = client.get_study(STUDY).send().await?;
        assert_eq!(study.name, STUDY);
        Ok(())
    }

    #[tokio::test]
    async fn list_studies() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{LOCATION}/studies"))),
                request::query(url_decoded(contains(("pageToken", "token-1")))),
                request::query(url_decoded(contains(("pageSize", "10")))),
            ])
            .respond_with(json_encoded(json!({
                "studies": [{"name": STUDY}],
                "nextPageToken": "token-2",
            }))),
        );

        let client = client(&server).await?;
        let response = client
            .list_studies(LOCATION)
            .set_page_token("token-1")
            .set_page_size(10)
            .send()
            .await?;
        assert_eq!(response.studies.len(), 1);
        assert_eq!(response.next_page_token, "token-2");
        Ok(())
    }

    #[tokio::test]
    async fn delete_study_no_content() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(eq(format!("/v1beta1/{STUDY}"))),
            ])
            .respond_with(status_code(204)),
        );

        let client = client(&server).await?;
        let response = client.delete_study(STUDY).send().await?;
        assert_eq!(response, wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn lookup_study() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{LOCATION}/studies:lookup"))),
                request::body(json_decoded(eq(json!({
                    "parent": LOCATION,
                    "displayName": "tune-lr",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": STUDY, "displayName": "tune-lr"}))),
        );

        let client = client(&server).await?;
        let study = client
            .lookup_study(LOCATION)
            .set_display_name("tune-lr")
            .send()
            .await?;
        assert_eq!(study.name, STUDY);
        Ok(())
    }

    #[tokio::test]
    async fn suggest_trials() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{STUDY}/trials:suggest"))),
                request::body(json_decoded(eq(json!({
                    "parent": STUDY,
                    "suggestionCount": 2,
                    "clientId": "worker-0",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": format!("{STUDY}/operations/op-1"),
                "done": false,
            }))),
        );

        let client = client(&server).await?;
        let operation = client
            .suggest_trials(STUDY)
            .set_suggestion_count(2)
            .set_client_id("worker-0")
            .send()
            .await?;
        assert_eq!(operation.name, format!("{STUDY}/operations/op-1"));
        assert!(!operation.done);
        Ok(())
    }

    #[tokio::test]
    async fn trial_lifecycle() -> Result {
        let server = Server::run();
        let trial = json!({"name": TRIAL, "state": "ACTIVE"});
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{STUDY}/trials"))),
            ])
            .respond_with(json_encoded(trial.clone())),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{TRIAL}"))),
            ])
            .respond_with(json_encoded(trial.clone())),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{TRIAL}:addTrialMeasurement"))),
                request::headers(contains((eq("x-goog-request-params"), eq(format!("trial_name={TRIAL}"))))),
                request::body(json_decoded(eq(json!({
                    "trialName": TRIAL,
                    "measurement": {
                        "stepCount": "10",
                        "metrics": [{"metricId": "accuracy", "value": 0.5}],
                    },
                })))),
            ])
            .respond_with(json_encoded(trial.clone())),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{TRIAL}:complete"))),
            ])
            .respond_with(json_encoded(json!({"name": TRIAL, "state": "SUCCEEDED"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{TRIAL}:stop"))),
            ])
            .respond_with(json_encoded(json!({"name": TRIAL, "state": "STOPPING"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(eq(format!("/v1beta1/{TRIAL}"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = client(&server).await?;
        let got = client
            .create_trial(STUDY)
            .set_trial(model::Trial::new())
            .send()
            .await?;
        assert_eq!(got.name, TRIAL);
        let got = client.get_trial(TRIAL).send().await?;
        assert_eq!(got.state, model::trial::State::Active);
        let got = client
            .add_trial_measurement(TRIAL)
            .set_measurement(
                model::Measurement::new()
                    .set_step_count(10)
                    .set_metrics([model::measurement::Metric::new()
                        .set_metric_id("accuracy")
                        .set_value(0.5)]),
            )
            .send()
            .await?;
        assert_eq!(got.name, TRIAL);
        let got = client.complete_trial(TRIAL).send().await?;
        assert_eq!(got.state, model::trial::State::Succeeded);
        let got = client.stop_trial(TRIAL).send().await?;
        assert_eq!(got.state, model::trial::State::Stopping);
        client.delete_trial(TRIAL).send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_trials_and_optimal() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{STUDY}/trials"))),
            ])
            .respond_with(json_encoded(json!({"trials": [{"name": TRIAL}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{STUDY}/trials:listOptimalTrials"))),
            ])
            .respond_with(json_encoded(json!({"optimalTrials": [{"name": TRIAL}]}))),
        );

        let client = client(&server).await?;
        let response = client.list_trials(STUDY).send().await?;
        assert_eq!(response.trials.len(), 1);
        assert!(response.next_page_token.is_empty());
        let response = client.list_optimal_trials(STUDY).send().await?;
        assert_eq!(response.optimal_trials[0].name, TRIAL);
        Ok(())
    }

    #[tokio::test]
    async fn check_trial_early_stopping_state() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{TRIAL}:checkTrialEarlyStoppingState"))),
            ])
            .respond_with(json_encoded(json!({
                "name": format!("{TRIAL}/operations/op-2"),
                "done": true,
                "response": {
                    "@type": "type.googleapis.com/google.cloud.aiplatform.v1beta1.CheckTrialEarlyStoppingStateResponse",
                    "shouldStop": true,
                },
            }))),
        );

        let client = client(&server).await?;
        let operation = client
            .check_trial_early_stopping_state(TRIAL)
            .send()
            .await?;
        assert!(operation.done);
        let response = match &operation.result {
            Some(longrunning::model::operation::Result::Response(any)) => {
                any.to_msg::<model::CheckTrialEarlyStoppingStateResponse>()?
            }
            r => panic!("expected a response, got {r:?}"),
        };
        assert!(response.should_stop, "{response:?}");
        Ok(())
    }

    #[tokio::test]
    async fn suggest_trials_result() -> Result {
        let server = Server::run();
        let name = format!("{STUDY}/operations/op-3");
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{name}"))),
            ])
            .respond_with(json_encoded(json!({
                "name": name,
                "done": true,
                "metadata": {
                    "@type": "type.googleapis.com/google.cloud.aiplatform.v1beta1.SuggestTrialsMetadata",
                    "clientId": "worker-0",
                },
                "response": {
                    "@type": "type.googleapis.com/google.cloud.aiplatform.v1beta1.SuggestTrialsResponse",
                    "trials": [{"name": TRIAL, "state": "ACTIVE"}],
                    "studyState": "ACTIVE",
                },
            }))),
        );

        let client = client(&server).await?;
        let operation = client.get_operation(&name).send().await?;
        let metadata = operation
            .metadata
            .as_ref()
            .map(|any| any.to_msg::<model::SuggestTrialsMetadata>())
            .transpose()?;
        assert_eq!(metadata.map(|m| m.client_id), Some("worker-0".to_string()));
        let response = match &operation.result {
            Some(longrunning::model::operation::Result::Response(any)) => {
                any.to_msg::<model::SuggestTrialsResponse>()?
            }
            r => panic!("expected a response, got {r:?}"),
        };
        assert_eq!(response.study_state, model::study::State::Active);
        let names: Vec<_> = response.trials.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec![TRIAL]);
        Ok(())
    }

    #[tokio::test]
    async fn operations() -> Result {
        let server = Server::run();
        let name = format!("{STUDY}/operations/op-1");
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{STUDY}/operations"))),
                request::query(url_decoded(contains(("filter", "done=true")))),
            ])
            .respond_with(json_encoded(json!({"operations": [{"name": name}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{name}"))),
            ])
            .respond_with(json_encoded(json!({"name": name, "done": true}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{name}:cancel"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1beta1/{name}:wait"))),
            ])
            .respond_with(json_encoded(json!({"name": name, "done": true}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(eq(format!("/v1beta1/{name}"))),
            ])
            .respond_with(status_code(204)),
        );

        let client = client(&server).await?;
        let response = client
            .list_operations(STUDY)
            .set_filter("done=true")
            .send()
            .await?;
        assert_eq!(response.operations.len(), 1);
        let operation = client.get_operation(&name).send().await?;
        assert!(operation.done);
        client.cancel_operation(&name).send().await?;
        let operation = client.wait_operation(&name).send().await?;
        assert!(operation.done);
        client.delete_operation(&name).send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn missing_parameter_sends_nothing() -> Result {
        // No expectations: any request fails the test when the server drops.
        let server = Server::run();
        let client = client(&server).await?;
        let err = client.get_study("").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client
            .get_trial("projects/p/locations/l/studies/s")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let fmt = format!("{}", err.source().unwrap());
        assert!(fmt.contains("projects/*/locations/*/studies/*/trials/*"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{STUDY}"))),
            ])
            .respond_with(status_code(404).body(
                    json!({"error": {
                        "code": 404,
                        "message": "study not found",
                        "status": "NOT_FOUND",
                    }})
                    .to_string(),
                )),
        );

        let client = client(&server).await?;
        let err = client.get_study(STUDY).send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        let status = err.status().unwrap();
        assert_eq!(status.code, gax::error::rpc::Code::NotFound);
        assert_eq!(status.message, "study not found");
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{STUDY}"))),
            ])
            .respond_with(status_code(503).body("try again later")),
        );

        let client = client(&server).await?;
        let err = client.get_study(STUDY).send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn bad_payload() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{STUDY}"))),
            ])
            .respond_with(status_code(200).body(r#"{"name": "#)),
        );

        let client = client(&server).await?;
        let err = client.get_study(STUDY).send().await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout_override() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{STUDY}"))),
            ])
            .respond_with(delay_and_then(
                    Duration::from_secs(2),
                    json_encoded(json!({"name": STUDY})),
                )),
        );

        let client = client(&server).await?;
        let err = client
            .get_study(STUDY)
            .with_attempt_timeout(Duration::from_millis(100))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn default_attempt_timeout() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{STUDY}"))),
            ])
            .respond_with(delay_and_then(
                Duration::from_secs(7),
                json_encoded(json!({"name": STUDY})),
            )),
        );

        let client = client(&server).await?;
        let start = std::time::Instant::now();
        let err = client.get_study(STUDY).send().await.unwrap_err();
        let elapsed = start.elapsed();
        assert!(err.is_timeout(), "{err:?}");
        assert!(elapsed >= Duration::from_secs(5), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(7), "{elapsed:?}");
        Ok(())
    }

    #[tokio::test]
    async fn user_agent() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{STUDY}"))),
                request::headers(contains(("user-agent", "per-call/1.0"))),
            ])
            .respond_with(json_encoded(json!({"name": STUDY}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v1beta1/{TRIAL}"))),
                request::headers(contains(("user-agent", "my-app/2.0"))),
            ])
            .respond_with(json_encoded(json!({"name": TRIAL}))),
        );

        let endpoint = server.url("/").to_string();
        let client = VizierService::builder()
            .with_endpoint(endpoint.trim_end_matches('/'))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_user_agent("my-app/2.0")
            .build()
            .await?;
        client
            .get_study(STUDY)
            .with_user_agent("per-call/1.0")
            .send()
            .await?;
        client.get_trial(TRIAL).send().await?;
        Ok(())
    }
}
