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

//! The `x-goog-api-client` header.
//!
//! The header reports the toolchain, the transport, and the library version.
//! The service uses it to attribute traffic to client libraries.

mod build_info {
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));
}

/// The token identifying the library type in the header.
pub const GAPIC: &str = "gapic";

/// The rustc version without the leading `rustc ` prefix.
fn rustc_version() -> &'static str {
    build_info::RUSTC_VERSION
        .strip_prefix("rustc ")
        .unwrap_or(build_info::RUSTC_VERSION)
}

/// Formats the header value for a client library at `version`.
pub fn header_value(version: &str) -> String {
    format!("gl-rust/{} rest/reqwest {GAPIC}/{version}", rustc_version())
}
