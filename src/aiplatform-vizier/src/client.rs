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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use crate::client_builder::{self, ClientBuilder};
use crate::credentials::CredentialsLoader;
use crate::options::TransportConfig;
use std::sync::Arc;

/// Implements a client for the Vertex AI Vizier API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_aiplatform_vizier_v1beta1::client::VizierService;
/// let client = VizierService::builder().build().await?;
/// let response = client
///     .list_trials("projects/my-project/locations/us-central1/studies/my-study")
///     .send()
///     .await?;
/// for trial in response.trials {
///     println!("{trial:?}");
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Vertex AI Vizier API.
///
/// Vertex AI Vizier is a service to solve blackbox optimization problems,
/// such as tuning machine learning hyperparameters and searching over deep
/// learning architectures.
///
/// # Configuration
///
/// To configure `VizierService` use the `with_*` methods in the type returned
/// by [builder()][VizierService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://aiplatform.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: crate::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: crate::client_builder::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `VizierService` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `VizierService` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct VizierService {
    inner: Arc<dyn super::stub::dynamic::VizierService>,
}

impl VizierService {
    /// Returns a builder for [VizierService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_aiplatform_vizier_v1beta1::client::VizierService;
    /// let client = VizierService::builder().build().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::VizierService + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: TransportConfig,
        loader: Arc<dyn CredentialsLoader>,
    ) -> client_builder::Result<Self> {
        let inner = Self::build_inner(config, loader).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: TransportConfig,
        loader: Arc<dyn CredentialsLoader>,
    ) -> client_builder::Result<Arc<dyn super::stub::dynamic::VizierService>> {
        if crate::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf, loader).await?));
        }
        Ok(Arc::new(Self::build_transport(conf, loader).await?))
    }

    async fn build_transport(
        conf: TransportConfig,
        loader: Arc<dyn CredentialsLoader>,
    ) -> client_builder::Result<impl super::stub::VizierService> {
        super::transport::VizierService::new(conf, loader.as_ref()).await
    }

    async fn build_with_tracing(
        conf: TransportConfig,
        loader: Arc<dyn CredentialsLoader>,
    ) -> client_builder::Result<impl super::stub::VizierService> {
        Self::build_transport(conf, loader)
            .await
            .map(super::tracing::VizierService::new)
    }

    /// Creates a Study. A resource name will be generated after creation of the
    /// Study.
    pub fn create_study(&self, parent: impl Into<String>) -> super::builder::vizier_service::CreateStudy {
        super::builder::vizier_service::CreateStudy::new(self.inner.clone()).set_parent(parent)
    }

    /// Gets a Study by name.
    pub fn get_study(&self, name: impl Into<String>) -> super::builder::vizier_service::GetStudy {
        super::builder::vizier_service::GetStudy::new(self.inner.clone()).set_name(name)
    }

    /// Lists all the studies in a region for an associated project.
    pub fn list_studies(&self, parent: impl Into<String>) -> super::builder::vizier_service::ListStudies {
        super::builder::vizier_service::ListStudies::new(self.inner.clone()).set_parent(parent)
    }

    /// Deletes a Study.
    pub fn delete_study(&self, name: impl Into<String>) -> super::builder::vizier_service::DeleteStudy {
        super::builder::vizier_service::DeleteStudy::new(self.inner.clone()).set_name(name)
    }

    /// Looks a study up using the user-defined display_name field instead of the
    /// fully qualified resource name.
    pub fn lookup_study(&self, parent: impl Into<String>) -> super::builder::vizier_service::LookupStudy {
        super::builder::vizier_service::LookupStudy::new(self.inner.clone()).set_parent(parent)
    }

    /// Adds one or more Trials to a Study, with parameter values
    /// suggested by Vertex AI Vizier. Returns a long-running
    /// operation associated with the generation of Trial suggestions.
    /// When this long-running operation succeeds, it will contain
    /// a [SuggestTrialsResponse][crate::model::SuggestTrialsResponse].
    pub fn suggest_trials(&self, parent: impl Into<String>) -> super::builder::vizier_service::SuggestTrials {
        super::builder::vizier_service::SuggestTrials::new(self.inner.clone()).set_parent(parent)
    }

    /// Adds a user provided Trial to a Study.
    pub fn create_trial(&self, parent: impl Into<String>) -> super::builder::vizier_service::CreateTrial {
        super::builder::vizier_service::CreateTrial::new(self.inner.clone()).set_parent(parent)
    }

    /// Gets a Trial.
    pub fn get_trial(&self, name: impl Into<String>) -> super::builder::vizier_service::GetTrial {
        super::builder::vizier_service::GetTrial::new(self.inner.clone()).set_name(name)
    }

    /// Lists the Trials associated with a Study.
    pub fn list_trials(&self, parent: impl Into<String>) -> super::builder::vizier_service::ListTrials {
        super::builder::vizier_service::ListTrials::new(self.inner.clone()).set_parent(parent)
    }

    /// Adds a measurement of the objective metrics to a Trial. This measurement
    /// is assumed to have been taken before the Trial is complete.
    pub fn add_trial_measurement(&self, trial_name: impl Into<String>) -> super::builder::vizier_service::AddTrialMeasurement {
        super::builder::vizier_service::AddTrialMeasurement::new(self.inner.clone()).set_trial_name(trial_name)
    }

    /// Marks a Trial as complete.
    pub fn complete_trial(&self, name: impl Into<String>) -> super::builder::vizier_service::CompleteTrial {
        super::builder::vizier_service::CompleteTrial::new(self.inner.clone()).set_name(name)
    }

    /// Deletes a Trial.
    pub fn delete_trial(&self, name: impl Into<String>) -> super::builder::vizier_service::DeleteTrial {
        super::builder::vizier_service::DeleteTrial::new(self.inner.clone()).set_name(name)
    }

    /// Checks whether a Trial should stop or not. Returns a
    /// long-running operation. When the operation is successful,
    /// it will contain a
    /// [CheckTrialEarlyStoppingStateResponse][crate::model::CheckTrialEarlyStoppingStateResponse].
    pub fn check_trial_early_stopping_state(&self, trial_name: impl Into<String>) -> super::builder::vizier_service::CheckTrialEarlyStoppingState {
        super::builder::vizier_service::CheckTrialEarlyStoppingState::new(self.inner.clone()).set_trial_name(trial_name)
    }

    /// Stops a Trial.
    pub fn stop_trial(&self, name: impl Into<String>) -> super::builder::vizier_service::StopTrial {
        super::builder::vizier_service::StopTrial::new(self.inner.clone()).set_name(name)
    }

    /// Lists the pareto-optimal Trials for multi-objective Study or the
    /// optimal Trials for single-objective Study. The definition of
    /// pareto-optimal can be checked in wiki page.
    /// <https://en.wikipedia.org/wiki/Pareto_efficiency>
    pub fn list_optimal_trials(&self, parent: impl Into<String>) -> super::builder::vizier_service::ListOptimalTrials {
        super::builder::vizier_service::ListOptimalTrials::new(self.inner.clone()).set_parent(parent)
    }

    /// Provides the [Operations][longrunning::model::Operation] service functionality in this service.
    pub fn list_operations(&self, name: impl Into<String>) -> super::builder::vizier_service::ListOperations {
        super::builder::vizier_service::ListOperations::new(self.inner.clone()).set_name(name)
    }

    /// Provides the [Operations][longrunning::model::Operation] service functionality in this service.
    pub fn get_operation(&self, name: impl Into<String>) -> super::builder::vizier_service::GetOperation {
        super::builder::vizier_service::GetOperation::new(self.inner.clone()).set_name(name)
    }

    /// Provides the [Operations][longrunning::model::Operation] service functionality in this service.
    pub fn delete_operation(&self, name: impl Into<String>) -> super::builder::vizier_service::DeleteOperation {
        super::builder::vizier_service::DeleteOperation::new(self.inner.clone()).set_name(name)
    }

    /// Provides the [Operations][longrunning::model::Operation] service functionality in this service.
    pub fn cancel_operation(&self, name: impl Into<String>) -> super::builder::vizier_service::CancelOperation {
        super::builder::vizier_service::CancelOperation::new(self.inner.clone()).set_name(name)
    }

    /// Provides the [Operations][longrunning::model::Operation] service functionality in this service.
    pub fn wait_operation(&self, name: impl Into<String>) -> super::builder::vizier_service::WaitOperation {
        super::builder::vizier_service::WaitOperation::new(self.inner.clone()).set_name(name)
    }
}
