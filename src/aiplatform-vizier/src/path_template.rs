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

//! Matching of resource names against the path templates of the service.
//!
//! Templates are decomposed into segments. A `"*"` segment matches exactly
//! one non-empty path segment, anything else must match literally.

/// `projects/*/locations/*`
pub const LOCATION: &[&str] = &["projects/", "*", "/locations/", "*"];

/// `projects/*/locations/*/studies/*`
pub const STUDY: &[&str] = &["projects/", "*", "/locations/", "*", "/studies/", "*"];

/// `projects/*/locations/*/studies/*/trials/*`
pub const TRIAL: &[&str] = &[
    "projects/",
    "*",
    "/locations/",
    "*",
    "/studies/",
    "*",
    "/trials/",
    "*",
];

/// The resources that own a collection of long-running operations.
pub const OPERATIONS_PARENT: &[&[&str]] = &[LOCATION, STUDY, TRIAL];

/// `projects/*/locations/*/operations/*`
pub const OPERATION: &[&str] = &["projects/", "*", "/locations/", "*", "/operations/", "*"];

/// `projects/*/locations/*/studies/*/operations/*`
pub const STUDY_OPERATION: &[&str] = &[
    "projects/",
    "*",
    "/locations/",
    "*",
    "/studies/",
    "*",
    "/operations/",
    "*",
];

/// `projects/*/locations/*/studies/*/trials/*/operations/*`
pub const TRIAL_OPERATION: &[&str] = &[
    "projects/",
    "*",
    "/locations/",
    "*",
    "/studies/",
    "*",
    "/trials/",
    "*",
    "/operations/",
    "*",
];

/// The templates accepted for the name of a long-running operation.
pub const ANY_OPERATION: &[&[&str]] = &[OPERATION, STUDY_OPERATION, TRIAL_OPERATION];

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(&'static str),
    #[error("parameter {field} should match '{expected}'; found: '{actual}'")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
}

/// Returns true if `value` matches the full template.
///
/// # Parameters
/// - `value` - the value of the string field
/// - `template` - segments to match the `value` against
pub fn matches(value: &str, template: &[&str]) -> bool {
    let mut remains = value;
    for needle in template {
        let count = match *needle {
            "*" => consume_single(remains),
            p => consume_literal(remains, p),
        };
        match count {
            Some(c) => remains = &remains[c..],
            None => return false,
        }
    }
    remains.is_empty()
}

/// Validates a path parameter before it is used to build a request path.
///
/// Empty values are missing parameters. Non-empty values must match the
/// template.
pub fn bind<'a>(field: &'static str, value: &'a str, template: &[&str]) -> gax::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(field));
    }
    if !matches(value, template) {
        return Err(gax::error::Error::binding(Error::Mismatch {
            field,
            expected: template.concat(),
            actual: value.to_string(),
        }));
    }
    Ok(value)
}

/// Like [bind], but the value may match any of the templates.
pub fn bind_any<'a>(
    field: &'static str,
    value: &'a str,
    templates: &[&[&str]],
) -> gax::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(field));
    }
    if templates.iter().any(|t| matches(value, t)) {
        return Ok(value);
    }
    Err(gax::error::Error::binding(Error::Mismatch {
        field,
        expected: templates
            .iter()
            .map(|t| t.concat())
            .collect::<Vec<_>>()
            .join(" OR "),
        actual: value.to_string(),
    }))
}

pub fn missing(name: &'static str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name))
}

/// Format a `x-goog-request-params` key value pair.
pub fn format((k, v): (&str, &str)) -> String {
    format!("{k}={v}")
}

fn consume_single(remains: &str) -> Option<usize> {
    let i = remains.find('/').unwrap_or(remains.len());
    (i != 0).then_some(i)
}

fn consume_literal(remains: &str, literal: &str) -> Option<usize> {
    remains.starts_with(literal).then_some(literal.len())
}
