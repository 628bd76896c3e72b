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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::VizierService].
///
/// Application developers may need to implement this trait to mock
/// `client::VizierService`. In other use-cases, application developers only
/// use `client::VizierService` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic, so mocks must
/// implement every method used in a test.
pub trait VizierService: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::VizierService::create_study].
    fn create_study(
        &self,
        _req: crate::model::CreateStudyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Study>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::get_study].
    fn get_study(
        &self,
        _req: crate::model::GetStudyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Study>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::list_studies].
    fn list_studies(
        &self,
        _req: crate::model::ListStudiesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListStudiesResponse>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::delete_study].
    fn delete_study(
        &self,
        _req: crate::model::DeleteStudyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::lookup_study].
    fn lookup_study(
        &self,
        _req: crate::model::LookupStudyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Study>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::suggest_trials].
    fn suggest_trials(
        &self,
        _req: crate::model::SuggestTrialsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::create_trial].
    fn create_trial(
        &self,
        _req: crate::model::CreateTrialRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Trial>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::get_trial].
    fn get_trial(
        &self,
        _req: crate::model::GetTrialRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Trial>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::list_trials].
    fn list_trials(
        &self,
        _req: crate::model::ListTrialsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListTrialsResponse>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::add_trial_measurement].
    fn add_trial_measurement(
        &self,
        _req: crate::model::AddTrialMeasurementRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Trial>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::complete_trial].
    fn complete_trial(
        &self,
        _req: crate::model::CompleteTrialRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Trial>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::delete_trial].
    fn delete_trial(
        &self,
        _req: crate::model::DeleteTrialRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::check_trial_early_stopping_state].
    fn check_trial_early_stopping_state(
        &self,
        _req: crate::model::CheckTrialEarlyStoppingStateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::stop_trial].
    fn stop_trial(
        &self,
        _req: crate::model::StopTrialRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Trial>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::list_optimal_trials].
    fn list_optimal_trials(
        &self,
        _req: crate::model::ListOptimalTrialsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListOptimalTrialsResponse>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::list_operations].
    fn list_operations(
        &self,
        _req: longrunning::model::ListOperationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::ListOperationsResponse>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::get_operation].
    fn get_operation(
        &self,
        _req: longrunning::model::GetOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::delete_operation].
    fn delete_operation(
        &self,
        _req: longrunning::model::DeleteOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::cancel_operation].
    fn cancel_operation(
        &self,
        _req: longrunning::model::CancelOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::VizierService::wait_operation].
    fn wait_operation(
        &self,
        _req: longrunning::model::WaitOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send
    {
        crate::unimplemented::unimplemented_stub()
    }
}
