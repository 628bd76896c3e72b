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

//! Google Cloud Client Libraries for Rust - Vertex AI Vizier API
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains traits, types, and functions to interact with the
//! [Vertex AI Vizier] service. Vizier manages hyperparameter tuning studies:
//! applications create a study, request trial suggestions, report
//! measurements for each trial, and query the optimal trials.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use google_cloud_aiplatform_vizier_v1beta1::client::VizierService;
//! let client = VizierService::builder().build().await?;
//! let study = client
//!     .get_study("projects/my-project/locations/us-central1/studies/my-study")
//!     .send()
//!     .await?;
//! println!("study = {study:?}");
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! [Vertex AI Vizier]: https://cloud.google.com/vertex-ai/docs/vizier/overview

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod client_builder;
pub mod credentials;
pub mod model;
pub mod options;
pub mod stub;
pub mod wrapped_methods;

pub(crate) mod api_header;
pub(crate) mod http;
pub(crate) mod path_template;
pub(crate) mod tracing;
pub(crate) mod transport;
pub(crate) mod unimplemented;
