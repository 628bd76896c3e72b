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
    use google_cloud_aiplatform_vizier_v1beta1 as vizier;
    use gax::options::RequestOptionsBuilder;
    use std::time::Duration;

    mockall::mock! {
        #[derive(Debug)]
        VizierService {}
        impl vizier::stub::VizierService for VizierService {
            async fn create_study( &self, _req: vizier::model::CreateStudyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::Study>>;
            async fn get_study( &self, _req: vizier::model::GetStudyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::Study>>;
            async fn list_studies( &self, _req: vizier::model::ListStudiesRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::ListStudiesResponse>>;
            async fn delete_study( &self, _req: vizier::model::DeleteStudyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<wkt::Empty>>;
            async fn lookup_study( &self, _req: vizier::model::LookupStudyRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::Study>>;
            async fn suggest_trials( &self, _req: vizier::model::SuggestTrialsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn create_trial( &self, _req: vizier::model::CreateTrialRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::Trial>>;
            async fn get_trial( &self, _req: vizier::model::GetTrialRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::Trial>>;
            async fn list_trials( &self, _req: vizier::model::ListTrialsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::ListTrialsResponse>>;
            async fn add_trial_measurement( &self, _req: vizier::model::AddTrialMeasurementRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::Trial>>;
            async fn complete_trial( &self, _req: vizier::model::CompleteTrialRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::Trial>>;
            async fn delete_trial( &self, _req: vizier::model::DeleteTrialRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<wkt::Empty>>;
            async fn check_trial_early_stopping_state( &self, _req: vizier::model::CheckTrialEarlyStoppingStateRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn stop_trial( &self, _req: vizier::model::StopTrialRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::Trial>>;
            async fn list_optimal_trials( &self, _req: vizier::model::ListOptimalTrialsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<vizier::model::ListOptimalTrialsResponse>>;
            async fn list_operations( &self, _req: longrunning::model::ListOperationsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::ListOperationsResponse>>;
            async fn get_operation( &self, _req: longrunning::model::GetOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn delete_operation( &self, _req: longrunning::model::DeleteOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<wkt::Empty>>;
            async fn cancel_operation( &self, _req: longrunning::model::CancelOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<wkt::Empty>>;
            async fn wait_operation( &self, _req: longrunning::model::WaitOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn mocking() {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockVizierService::new();
        mock.expect_create_study()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_get_study()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_list_studies()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_delete_study()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_lookup_study()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_suggest_trials()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_create_trial()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_get_trial()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_list_trials()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_add_trial_measurement()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_complete_trial()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_delete_trial()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_check_trial_early_stopping_state()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_stop_trial()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_list_optimal_trials()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_list_operations()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_delete_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_cancel_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));
        mock.expect_wait_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(gax::error::Error::io("simulated failure")));

        let client = vizier::client::VizierService::from_stub(mock);

        let _ = client.create_study("").send().await.unwrap_err();
        let _ = client.get_study("").send().await.unwrap_err();
        let _ = client.list_studies("").send().await.unwrap_err();
        let _ = client.delete_study("").send().await.unwrap_err();
        let _ = client.lookup_study("").send().await.unwrap_err();
        let _ = client.suggest_trials("").send().await.unwrap_err();
        let _ = client.create_trial("").send().await.unwrap_err();
        let _ = client.get_trial("").send().await.unwrap_err();
        let _ = client.list_trials("").send().await.unwrap_err();
        let _ = client.add_trial_measurement("").send().await.unwrap_err();
        let _ = client.complete_trial("").send().await.unwrap_err();
        let _ = client.delete_trial("").send().await.unwrap_err();
        let _ = client.check_trial_early_stopping_state("").send().await.unwrap_err();
        let _ = client.stop_trial("").send().await.unwrap_err();
        let _ = client.list_optimal_trials("").send().await.unwrap_err();
        let _ = client.list_operations("").send().await.unwrap_err();
        let _ = client.get_operation("").send().await.unwrap_err();
        let _ = client.delete_operation("").send().await.unwrap_err();
        let _ = client.cancel_operation("").send().await.unwrap_err();
        let _ = client.wait_operation("").send().await.unwrap_err();
    }

    #[tokio::test]
    async fn request_and_options() -> anyhow::Result<()> {
        let mut mock = MockVizierService::new();
        mock.expect_get_trial()
            .withf(|req, options| {
                req.name == "projects/p/locations/l/studies/s/trials/1"
                    && options.attempt_timeout() == &Some(Duration::from_secs(30))
                    && options.user_agent().as_deref() == Some("test-agent/1.0")
            })
            .return_once(|req, _| {
                Ok(gax::response::Response::from(
                    vizier::model::Trial::new()
                        .set_name(req.name)
                        .set_state(vizier::model::trial::State::Active),
                ))
            });

        let client = vizier::client::VizierService::from_stub(mock);
        let trial = client
            .get_trial("projects/p/locations/l/studies/s/trials/1")
            .with_attempt_timeout(Duration::from_secs(30))
            .with_user_agent("test-agent/1.0")
            .send()
            .await?;
        assert_eq!(trial.state, vizier::model::trial::State::Active);
        Ok(())
    }

    #[tokio::test]
    async fn builder_setters() -> anyhow::Result<()> {
        let mut mock = MockVizierService::new();
        mock.expect_complete_trial()
            .withf(|req, _| {
                req.name == "projects/p/locations/l/studies/s/trials/1"
                    && req.trial_infeasible
                    && req.infeasible_reason == "out of memory"
                    && req.final_measurement.is_none()
            })
            .return_once(|req, _| {
                Ok(gax::response::Response::from(
                    vizier::model::Trial::new()
                        .set_name(req.name)
                        .set_state(vizier::model::trial::State::Infeasible),
                ))
            });
        mock.expect_suggest_trials()
            .withf(|req, _| {
                req.parent == "projects/p/locations/l/studies/s"
                    && req.suggestion_count == 3
                    && req.client_id == "worker-1"
            })
            .return_once(|_, _| {
                Ok(gax::response::Response::from(
                    longrunning::model::Operation::new().set_name("op-1"),
                ))
            });

        let client = vizier::client::VizierService::from_stub(mock);
        let trial = client
            .complete_trial("projects/p/locations/l/studies/s/trials/1")
            .set_trial_infeasible(true)
            .set_infeasible_reason("out of memory")
            .send()
            .await?;
        assert_eq!(trial.state, vizier::model::trial::State::Infeasible);
        let operation = client
            .suggest_trials("projects/p/locations/l/studies/s")
            .with_request(
                vizier::model::SuggestTrialsRequest::new()
                    .set_parent("projects/p/locations/l/studies/s")
                    .set_suggestion_count(3)
                    .set_client_id("worker-1"),
            )
            .send()
            .await?;
        assert_eq!(operation.name, "op-1");
        Ok(())
    }

    mod default_stub {
        use super::vizier;

        #[derive(Debug)]
        struct DefaultVizierService;
        impl vizier::stub::VizierService for DefaultVizierService {}

        macro_rules! default_stub_method {
            ($($method:ident),*) => {
                $(
                    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
                    #[should_panic]
                    async fn $method() {
                        let client = vizier::client::VizierService::from_stub(DefaultVizierService);
                        let _ = client.$method("").send().await;
                    }
                )*
            };
        }

        default_stub_method!(
            create_study,
            get_study,
            list_studies,
            delete_study,
            lookup_study,
            suggest_trials,
            create_trial,
            get_trial,
            list_trials,
            add_trial_measurement,
            complete_trial,
            delete_trial,
            check_trial_early_stopping_state,
            stop_trial,
            list_optimal_trials,
            list_operations,
            get_operation,
            delete_operation,
            cancel_operation,
            wait_operation
        );
    }
}
