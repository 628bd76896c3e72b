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

//! Per-method defaults for the Vizier RPCs.
//!
//! Each RPC is "wrapped" with a default per-attempt timeout and the client
//! information headers. The transports apply these defaults to the
//! [RequestOptions] of each request, unless the application already set them.

use crate::options::ClientInfo;
use gax::options::RequestOptions;
use std::collections::HashMap;
use std::time::Duration;

/// The default per-attempt timeout for all the Vizier RPCs.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The RPCs in the Vizier service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Method {
    CreateStudy,
    GetStudy,
    ListStudies,
    DeleteStudy,
    LookupStudy,
    SuggestTrials,
    CreateTrial,
    GetTrial,
    ListTrials,
    AddTrialMeasurement,
    CompleteTrial,
    DeleteTrial,
    CheckTrialEarlyStoppingState,
    StopTrial,
    ListOptimalTrials,
}

impl Method {
    /// All the RPCs, in the order they appear in the service definition.
    pub const ALL: [Method; 15] = [
        Method::CreateStudy,
        Method::GetStudy,
        Method::ListStudies,
        Method::DeleteStudy,
        Method::LookupStudy,
        Method::SuggestTrials,
        Method::CreateTrial,
        Method::GetTrial,
        Method::ListTrials,
        Method::AddTrialMeasurement,
        Method::CompleteTrial,
        Method::DeleteTrial,
        Method::CheckTrialEarlyStoppingState,
        Method::StopTrial,
        Method::ListOptimalTrials,
    ];

    /// The RPC name, as it appears in the service definition.
    pub fn name(&self) -> &'static str {
        match self {
            Method::CreateStudy => "CreateStudy",
            Method::GetStudy => "GetStudy",
            Method::ListStudies => "ListStudies",
            Method::DeleteStudy => "DeleteStudy",
            Method::LookupStudy => "LookupStudy",
            Method::SuggestTrials => "SuggestTrials",
            Method::CreateTrial => "CreateTrial",
            Method::GetTrial => "GetTrial",
            Method::ListTrials => "ListTrials",
            Method::AddTrialMeasurement => "AddTrialMeasurement",
            Method::CompleteTrial => "CompleteTrial",
            Method::DeleteTrial => "DeleteTrial",
            Method::CheckTrialEarlyStoppingState => "CheckTrialEarlyStoppingState",
            Method::StopTrial => "StopTrial",
            Method::ListOptimalTrials => "ListOptimalTrials",
        }
    }

    /// The fully qualified RPC name.
    pub fn full_name(&self) -> String {
        format!("google.cloud.aiplatform.v1beta1.VizierService/{}", self.name())
    }

    /// The URL path template for the RPC in the REST transport.
    pub fn path_template(&self) -> &'static str {
        match self {
            Method::CreateStudy => "/v1beta1/{parent}/studies",
            Method::GetStudy => "/v1beta1/{name}",
            Method::ListStudies => "/v1beta1/{parent}/studies",
            Method::DeleteStudy => "/v1beta1/{name}",
            Method::LookupStudy => "/v1beta1/{parent}/studies:lookup",
            Method::SuggestTrials => "/v1beta1/{parent}/trials:suggest",
            Method::CreateTrial => "/v1beta1/{parent}/trials",
            Method::GetTrial => "/v1beta1/{name}",
            Method::ListTrials => "/v1beta1/{parent}/trials",
            Method::AddTrialMeasurement => "/v1beta1/{trial_name}:addTrialMeasurement",
            Method::CompleteTrial => "/v1beta1/{name}:complete",
            Method::DeleteTrial => "/v1beta1/{name}",
            Method::CheckTrialEarlyStoppingState => {
                "/v1beta1/{trial_name}:checkTrialEarlyStoppingState"
            }
            Method::StopTrial => "/v1beta1/{name}:stop",
            Method::ListOptimalTrials => "/v1beta1/{parent}/trials:listOptimalTrials",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The defaults attached to one RPC.
#[derive(Clone, Debug, PartialEq)]
pub struct WrappedMethod {
    pub method: Method,
    pub default_timeout: Duration,
    pub client_info: ClientInfo,
}

impl WrappedMethod {
    /// Fills in any defaults missing from `options`.
    pub fn apply(&self, mut options: RequestOptions) -> RequestOptions {
        if options.attempt_timeout().is_none() {
            options.set_attempt_timeout(self.default_timeout);
        }
        if options.user_agent().is_none() {
            if let Some(ua) = &self.client_info.user_agent {
                options.set_user_agent(ua.clone());
            }
        }
        options
    }
}

/// The defaults for all the RPCs in the service.
#[derive(Clone, Debug)]
pub struct WrappedMethods(HashMap<Method, WrappedMethod>);

impl WrappedMethods {
    pub fn get(&self, method: Method) -> Option<&WrappedMethod> {
        self.0.get(&method)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Method, &WrappedMethod)> {
        self.0.iter()
    }

    #[cfg(test)]
    pub(crate) fn with_default_timeout(mut self, method: Method, timeout: Duration) -> Self {
        if let Some(w) = self.0.get_mut(&method) {
            w.default_timeout = timeout;
        }
        self
    }

    /// Fills in the defaults for `method` missing from `options`.
    pub fn apply(&self, method: Method, options: RequestOptions) -> RequestOptions {
        match self.get(method) {
            Some(w) => w.apply(options),
            None => options,
        }
    }
}

/// Precomputes the defaults for each RPC.
pub fn prep_wrapped_methods(client_info: &ClientInfo) -> WrappedMethods {
    let map = Method::ALL
        .iter()
        .map(|m| {
            let wrapped = WrappedMethod {
                method: *m,
                default_timeout: DEFAULT_TIMEOUT,
                client_info: client_info.clone(),
            };
            (*m, wrapped)
        })
        .collect();
    WrappedMethods(map)
}
