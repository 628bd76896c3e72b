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

//! Captures the toolchain version for the `x-goog-api-client` header.

use std::io::{Error, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| Error::other("OUT_DIR is not set"))?;
    let rustc = rustc_version::version_meta().map_err(Error::other)?;
    let contents = format!(
        "pub(crate) const RUSTC_VERSION: &str = \"{}\";\n",
        rustc.semver
    );
    std::fs::write(out_dir.join("build_env.rs"), contents)?;
    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
