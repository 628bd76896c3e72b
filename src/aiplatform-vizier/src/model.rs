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

//! The messages and enums used by the Vizier service.
//!
//! All the messages serialize to the JSON representation used by the REST
//! transport: field names use `camelCase`, 64-bit integers are encoded as
//! strings, and enums use their `SCREAMING_SNAKE_CASE` names.

#![allow(clippy::large_enum_variant)]

use std::collections::HashMap;

pub(crate) fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

/// A message representing a Study.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Study {
    /// Output only. The name of a study. The study's globally unique
    /// identifier. Format: `projects/{project}/locations/{location}/studies/{study}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Required. Describes the Study, default value is empty string.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    /// Required. Configuration of the Study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_spec: Option<StudySpec>,

    /// Output only. The detailed state of a Study.
    #[serde(skip_serializing_if = "is_default")]
    pub state: study::State,

    /// Output only. Time at which the study was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// Output only. A human readable reason why the Study is inactive.
    /// This should be empty if a study is ACTIVE or COMPLETED.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inactive_reason: String,
}

impl Study {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Study::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][Study::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [study_spec][Study::study_spec].
    pub fn set_study_spec<T: Into<StudySpec>>(mut self, v: T) -> Self {
        self.study_spec = Some(v.into());
        self
    }

    /// Sets or clears the value of [study_spec][Study::study_spec].
    pub fn set_or_clear_study_spec<T: Into<StudySpec>>(mut self, v: Option<T>) -> Self {
        self.study_spec = v.map(Into::into);
        self
    }

    /// Sets the value of [state][Study::state].
    pub fn set_state<T: Into<study::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [create_time][Study::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [inactive_reason][Study::inactive_reason].
    pub fn set_inactive_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.inactive_reason = v.into();
        self
    }
}

/// Defines additional types related to [Study].
pub mod study {
    /// Describes the Study state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
    #[non_exhaustive]
    pub enum State {
        /// The study state is unspecified.
        #[default]
        #[serde(rename = "STATE_UNSPECIFIED")]
        Unspecified,
        /// The study is active.
        #[serde(rename = "ACTIVE")]
        Active,
        /// The study is stopped due to an internal error.
        #[serde(rename = "INACTIVE")]
        Inactive,
        /// The study is done when the service exhausts the parameter search
        /// space or max_trial_count is reached.
        #[serde(rename = "COMPLETED")]
        Completed,
        /// A value not known to this version of the library.
        #[serde(other, skip_serializing)]
        Unknown,
    }
}

/// A message representing a Trial. A Trial contains a unique set of
/// Parameters that has been or will be evaluated, along with the objective
/// metrics got by running the Trial.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Trial {
    /// Output only. Resource name of the Trial assigned by the service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Output only. The identifier of the Trial assigned by the service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Output only. The detailed state of the Trial.
    #[serde(skip_serializing_if = "is_default")]
    pub state: trial::State,

    /// Output only. The parameters of the Trial.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<trial::Parameter>,

    /// Output only. The final measurement containing the objective value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_measurement: Option<Measurement>,

    /// Output only. A list of measurements that are strictly lexicographically
    /// ordered by their induced tuples (steps, elapsed_duration).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub measurements: Vec<Measurement>,

    /// Output only. Time when the Trial was started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<wkt::Timestamp>,

    /// Output only. Time when the Trial's status changed to `SUCCEEDED` or
    /// `INFEASIBLE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<wkt::Timestamp>,

    /// Output only. The identifier of the client that originally requested
    /// this Trial.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_id: String,

    /// Output only. A human readable string describing why the Trial is
    /// infeasible.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub infeasible_reason: String,

    /// Output only. The CustomJob name linked to the Trial.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_job: String,

    /// Output only. URIs for accessing interactive shells, keyed by worker
    /// pool and replica.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub web_access_uris: HashMap<String, String>,
}

impl Trial {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Trial::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [id][Trial::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [state][Trial::state].
    pub fn set_state<T: Into<trial::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [parameters][Trial::parameters].
    pub fn set_parameters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<trial::Parameter>,
    {
        self.parameters = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [final_measurement][Trial::final_measurement].
    pub fn set_final_measurement<T: Into<Measurement>>(mut self, v: T) -> Self {
        self.final_measurement = Some(v.into());
        self
    }

    /// Sets or clears the value of [final_measurement][Trial::final_measurement].
    pub fn set_or_clear_final_measurement<T: Into<Measurement>>(mut self, v: Option<T>) -> Self {
        self.final_measurement = v.map(Into::into);
        self
    }

    /// Sets the value of [measurements][Trial::measurements].
    pub fn set_measurements<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Measurement>,
    {
        self.measurements = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [start_time][Trial::start_time].
    pub fn set_start_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][Trial::end_time].
    pub fn set_end_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [client_id][Trial::client_id].
    pub fn set_client_id<T: Into<String>>(mut self, v: T) -> Self {
        self.client_id = v.into();
        self
    }

    /// Sets the value of [infeasible_reason][Trial::infeasible_reason].
    pub fn set_infeasible_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.infeasible_reason = v.into();
        self
    }

    /// Sets the value of [custom_job][Trial::custom_job].
    pub fn set_custom_job<T: Into<String>>(mut self, v: T) -> Self {
        self.custom_job = v.into();
        self
    }

    /// Sets the value of [web_access_uris][Trial::web_access_uris].
    pub fn set_web_access_uris<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.web_access_uris = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Defines additional types related to [Trial].
pub mod trial {
    /// A message representing a parameter to be tuned.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Parameter {
        /// Output only. The ID of the parameter. The parameter should be
        /// defined in the study spec.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub parameter_id: String,

        /// Output only. The value of the parameter. `number_value` for
        /// `DOUBLE`, `INTEGER`, or `DISCRETE` parameters, `string_value` for
        /// `CATEGORICAL` parameters.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub value: Option<wkt::Value>,
    }

    impl Parameter {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [parameter_id][Parameter::parameter_id].
        pub fn set_parameter_id<T: Into<String>>(mut self, v: T) -> Self {
            self.parameter_id = v.into();
            self
        }

        /// Sets the value of [value][Parameter::value].
        pub fn set_value<T: Into<wkt::Value>>(mut self, v: T) -> Self {
            self.value = Some(v.into());
            self
        }
    }

    /// Describes a Trial state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
    #[non_exhaustive]
    pub enum State {
        /// The Trial state is unspecified.
        #[default]
        #[serde(rename = "STATE_UNSPECIFIED")]
        Unspecified,
        /// Indicates that a specific Trial has been requested, but it has not
        /// yet been suggested by the service.
        #[serde(rename = "REQUESTED")]
        Requested,
        /// Indicates that the Trial has been suggested.
        #[serde(rename = "ACTIVE")]
        Active,
        /// Indicates that the Trial should stop according to the service.
        #[serde(rename = "STOPPING")]
        Stopping,
        /// Indicates that the Trial is completed successfully.
        #[serde(rename = "SUCCEEDED")]
        Succeeded,
        /// Indicates that the Trial should not be attempted again.
        #[serde(rename = "INFEASIBLE")]
        Infeasible,
        /// A value not known to this version of the library.
        #[serde(other, skip_serializing)]
        Unknown,
    }
}

/// Represents specification of a Study.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StudySpec {
    /// Required. Metric specs for the Study.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<study_spec::MetricSpec>,

    /// Required. The set of parameters to tune.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<study_spec::ParameterSpec>,

    /// The search algorithm specified for the Study.
    #[serde(skip_serializing_if = "is_default")]
    pub algorithm: study_spec::Algorithm,

    /// The observation noise level of the study.
    #[serde(skip_serializing_if = "is_default")]
    pub observation_noise: study_spec::ObservationNoise,

    /// Describe which measurement selection type will be used.
    #[serde(skip_serializing_if = "is_default")]
    pub measurement_selection_type: study_spec::MeasurementSelectionType,

    /// The automated early stopping configuration.
    #[serde(flatten)]
    pub automated_stopping_spec: Option<study_spec::AutomatedStoppingSpec>,
}

impl StudySpec {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metrics][StudySpec::metrics].
    pub fn set_metrics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<study_spec::MetricSpec>,
    {
        self.metrics = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [parameters][StudySpec::parameters].
    pub fn set_parameters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<study_spec::ParameterSpec>,
    {
        self.parameters = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [algorithm][StudySpec::algorithm].
    pub fn set_algorithm<T: Into<study_spec::Algorithm>>(mut self, v: T) -> Self {
        self.algorithm = v.into();
        self
    }

    /// Sets the value of [observation_noise][StudySpec::observation_noise].
    pub fn set_observation_noise<T: Into<study_spec::ObservationNoise>>(mut self, v: T) -> Self {
        self.observation_noise = v.into();
        self
    }

    /// Sets the value of [measurement_selection_type][StudySpec::measurement_selection_type].
    pub fn set_measurement_selection_type<T: Into<study_spec::MeasurementSelectionType>>(
        mut self,
        v: T,
    ) -> Self {
        self.measurement_selection_type = v.into();
        self
    }

    /// Sets the value of [automated_stopping_spec][StudySpec::automated_stopping_spec].
    pub fn set_automated_stopping_spec<T: Into<Option<study_spec::AutomatedStoppingSpec>>>(
        mut self,
        v: T,
    ) -> Self {
        self.automated_stopping_spec = v.into();
        self
    }
}

/// Defines additional types related to [StudySpec].
pub mod study_spec {
    use super::is_default;

    /// Represents a metric to optimize.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct MetricSpec {
        /// Required. The ID of the metric. Must not contain whitespaces and
        /// must be unique amongst all MetricSpecs.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub metric_id: String,

        /// Required. The optimization goal of the metric.
        #[serde(skip_serializing_if = "is_default")]
        pub goal: metric_spec::GoalType,
    }

    impl MetricSpec {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [metric_id][MetricSpec::metric_id].
        pub fn set_metric_id<T: Into<String>>(mut self, v: T) -> Self {
            self.metric_id = v.into();
            self
        }

        /// Sets the value of [goal][MetricSpec::goal].
        pub fn set_goal<T: Into<metric_spec::GoalType>>(mut self, v: T) -> Self {
            self.goal = v.into();
            self
        }
    }

    /// Defines additional types related to [MetricSpec].
    pub mod metric_spec {
        /// The available types of optimization goals.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
        #[non_exhaustive]
        pub enum GoalType {
            /// Goal Type will default to maximize.
            #[default]
            #[serde(rename = "GOAL_TYPE_UNSPECIFIED")]
            Unspecified,
            /// Maximize the goal metric.
            #[serde(rename = "MAXIMIZE")]
            Maximize,
            /// Minimize the goal metric.
            #[serde(rename = "MINIMIZE")]
            Minimize,
            /// A value not known to this version of the library.
            #[serde(other, skip_serializing)]
            Unknown,
        }
    }

    /// Represents a single parameter to optimize.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ParameterSpec {
        /// Required. The ID of the parameter. Must not contain whitespaces and
        /// must be unique amongst all ParameterSpecs.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub parameter_id: String,

        /// How the parameter should be scaled.
        /// Leave unset for `CATEGORICAL` parameters.
        #[serde(skip_serializing_if = "is_default")]
        pub scale_type: parameter_spec::ScaleType,

        /// The feasible values of the parameter.
        #[serde(flatten)]
        pub parameter_value_spec: Option<parameter_spec::ParameterValueSpec>,
    }

    impl ParameterSpec {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [parameter_id][ParameterSpec::parameter_id].
        pub fn set_parameter_id<T: Into<String>>(mut self, v: T) -> Self {
            self.parameter_id = v.into();
            self
        }

        /// Sets the value of [scale_type][ParameterSpec::scale_type].
        pub fn set_scale_type<T: Into<parameter_spec::ScaleType>>(mut self, v: T) -> Self {
            self.scale_type = v.into();
            self
        }

        /// Sets the value of [parameter_value_spec][ParameterSpec::parameter_value_spec].
        pub fn set_parameter_value_spec<
            T: Into<Option<parameter_spec::ParameterValueSpec>>,
        >(
            mut self,
            v: T,
        ) -> Self {
            self.parameter_value_spec = v.into();
            self
        }
    }

    /// Defines additional types related to [ParameterSpec].
    pub mod parameter_spec {
        /// Value specification for a parameter in `DOUBLE` type.
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct DoubleValueSpec {
            /// Required. Inclusive minimum value of the parameter.
            pub min_value: f64,
            /// Required. Inclusive maximum value of the parameter.
            pub max_value: f64,
            /// A default value for a `DOUBLE` parameter that is assumed to be a
            /// relatively good starting point.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub default_value: Option<f64>,
        }

        impl DoubleValueSpec {
            pub fn new(min_value: f64, max_value: f64) -> Self {
                Self {
                    min_value,
                    max_value,
                    default_value: None,
                }
            }

            /// Sets the value of [default_value][DoubleValueSpec::default_value].
            pub fn set_default_value(mut self, v: f64) -> Self {
                self.default_value = Some(v);
                self
            }
        }

        /// Value specification for a parameter in `INTEGER` type.
        #[serde_with::serde_as]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct IntegerValueSpec {
            /// Required. Inclusive minimum value of the parameter.
            #[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")]
            pub min_value: i64,
            /// Required. Inclusive maximum value of the parameter.
            #[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")]
            pub max_value: i64,
            /// A default value for an `INTEGER` parameter.
            #[serde(skip_serializing_if = "Option::is_none")]
            #[serde_as(as = "Option<serde_with::PickFirst<(serde_with::DisplayFromStr, _)>>")]
            pub default_value: Option<i64>,
        }

        impl IntegerValueSpec {
            pub fn new(min_value: i64, max_value: i64) -> Self {
                Self {
                    min_value,
                    max_value,
                    default_value: None,
                }
            }

            /// Sets the value of [default_value][IntegerValueSpec::default_value].
            pub fn set_default_value(mut self, v: i64) -> Self {
                self.default_value = Some(v);
                self
            }
        }

        /// Value specification for a parameter in `CATEGORICAL` type.
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct CategoricalValueSpec {
            /// Required. The list of possible categories.
            pub values: Vec<String>,
            /// A default value for a `CATEGORICAL` parameter.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub default_value: Option<String>,
        }

        impl CategoricalValueSpec {
            pub fn new<T, V>(values: T) -> Self
            where
                T: IntoIterator<Item = V>,
                V: Into<String>,
            {
                Self {
                    values: values.into_iter().map(Into::into).collect(),
                    default_value: None,
                }
            }

            /// Sets the value of [default_value][CategoricalValueSpec::default_value].
            pub fn set_default_value<T: Into<String>>(mut self, v: T) -> Self {
                self.default_value = Some(v.into());
                self
            }
        }

        /// Value specification for a parameter in `DISCRETE` type.
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct DiscreteValueSpec {
            /// Required. A list of possible values, in increasing order.
            pub values: Vec<f64>,
            /// A default value for a `DISCRETE` parameter.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub default_value: Option<f64>,
        }

        impl DiscreteValueSpec {
            pub fn new<T: IntoIterator<Item = f64>>(values: T) -> Self {
                Self {
                    values: values.into_iter().collect(),
                    default_value: None,
                }
            }

            /// Sets the value of [default_value][DiscreteValueSpec::default_value].
            pub fn set_default_value(mut self, v: f64) -> Self {
                self.default_value = Some(v);
                self
            }
        }

        /// The type of scaling that should be applied to this parameter.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
        #[non_exhaustive]
        pub enum ScaleType {
            /// By default, no scaling is applied.
            #[default]
            #[serde(rename = "SCALE_TYPE_UNSPECIFIED")]
            Unspecified,
            /// Scales the feasible space to (0, 1) linearly.
            #[serde(rename = "UNIT_LINEAR_SCALE")]
            UnitLinearScale,
            /// Scales the feasible space logarithmically to (0, 1).
            #[serde(rename = "UNIT_LOG_SCALE")]
            UnitLogScale,
            /// Scales the feasible space "reverse" logarithmically to (0, 1).
            #[serde(rename = "UNIT_REVERSE_LOG_SCALE")]
            UnitReverseLogScale,
            /// A value not known to this version of the library.
            #[serde(other, skip_serializing)]
            Unknown,
        }

        /// The feasible values of a parameter, exactly one is set.
        #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        #[non_exhaustive]
        pub enum ParameterValueSpec {
            /// The value spec for a `DOUBLE` parameter.
            DoubleValueSpec(DoubleValueSpec),
            /// The value spec for an `INTEGER` parameter.
            IntegerValueSpec(IntegerValueSpec),
            /// The value spec for a `CATEGORICAL` parameter.
            CategoricalValueSpec(CategoricalValueSpec),
            /// The value spec for a `DISCRETE` parameter.
            DiscreteValueSpec(DiscreteValueSpec),
        }

        impl From<DoubleValueSpec> for ParameterValueSpec {
            fn from(v: DoubleValueSpec) -> Self {
                Self::DoubleValueSpec(v)
            }
        }

        impl From<IntegerValueSpec> for ParameterValueSpec {
            fn from(v: IntegerValueSpec) -> Self {
                Self::IntegerValueSpec(v)
            }
        }

        impl From<CategoricalValueSpec> for ParameterValueSpec {
            fn from(v: CategoricalValueSpec) -> Self {
                Self::CategoricalValueSpec(v)
            }
        }

        impl From<DiscreteValueSpec> for ParameterValueSpec {
            fn from(v: DiscreteValueSpec) -> Self {
                Self::DiscreteValueSpec(v)
            }
        }

        impl From<DoubleValueSpec> for Option<ParameterValueSpec> {
            fn from(v: DoubleValueSpec) -> Self {
                Some(v.into())
            }
        }

        impl From<IntegerValueSpec> for Option<ParameterValueSpec> {
            fn from(v: IntegerValueSpec) -> Self {
                Some(v.into())
            }
        }

        impl From<CategoricalValueSpec> for Option<ParameterValueSpec> {
            fn from(v: CategoricalValueSpec) -> Self {
                Some(v.into())
            }
        }

        impl From<DiscreteValueSpec> for Option<ParameterValueSpec> {
            fn from(v: DiscreteValueSpec) -> Self {
                Some(v.into())
            }
        }
    }

    /// The early stopping spec implementations.
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum AutomatedStoppingSpec {
        /// The automated early stopping spec using decay curve rule.
        DecayCurveStoppingSpec(DecayCurveAutomatedStoppingSpec),
        /// The automated early stopping spec using median rule.
        MedianAutomatedStoppingSpec(MedianAutomatedStoppingSpec),
    }

    impl From<DecayCurveAutomatedStoppingSpec> for Option<AutomatedStoppingSpec> {
        fn from(v: DecayCurveAutomatedStoppingSpec) -> Self {
            Some(AutomatedStoppingSpec::DecayCurveStoppingSpec(v))
        }
    }

    impl From<MedianAutomatedStoppingSpec> for Option<AutomatedStoppingSpec> {
        fn from(v: MedianAutomatedStoppingSpec) -> Self {
            Some(AutomatedStoppingSpec::MedianAutomatedStoppingSpec(v))
        }
    }

    /// The decay curve automated stopping rule builds a Gaussian Process
    /// Regressor to predict the final objective value of a Trial based on the
    /// already completed Trials and the intermediate measurements of the
    /// current Trial.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct DecayCurveAutomatedStoppingSpec {
        /// True if the elapsed duration is used as the x-axis instead of the
        /// step count.
        #[serde(skip_serializing_if = "is_default")]
        pub use_elapsed_duration: bool,
    }

    impl DecayCurveAutomatedStoppingSpec {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [use_elapsed_duration][DecayCurveAutomatedStoppingSpec::use_elapsed_duration].
        pub fn set_use_elapsed_duration(mut self, v: bool) -> Self {
            self.use_elapsed_duration = v;
            self
        }
    }

    /// The median automated stopping rule stops a pending Trial if the
    /// Trial's best objective value is strictly below the median performance
    /// of all completed Trials reported up to the Trial's last measurement.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct MedianAutomatedStoppingSpec {
        /// True if median automated stopping rule applies on the elapsed
        /// duration instead of the step count.
        #[serde(skip_serializing_if = "is_default")]
        pub use_elapsed_duration: bool,
    }

    impl MedianAutomatedStoppingSpec {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [use_elapsed_duration][MedianAutomatedStoppingSpec::use_elapsed_duration].
        pub fn set_use_elapsed_duration(mut self, v: bool) -> Self {
            self.use_elapsed_duration = v;
            self
        }
    }

    /// The available search algorithms for the Study.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
    #[non_exhaustive]
    pub enum Algorithm {
        /// The default algorithm used by Vertex AI for hyperparameter tuning.
        #[default]
        #[serde(rename = "ALGORITHM_UNSPECIFIED")]
        Unspecified,
        /// Simple grid search within the feasible space.
        #[serde(rename = "GRID_SEARCH")]
        GridSearch,
        /// Simple random search within the feasible space.
        #[serde(rename = "RANDOM_SEARCH")]
        RandomSearch,
        /// A value not known to this version of the library.
        #[serde(other, skip_serializing)]
        Unknown,
    }

    /// Describes the noise level of the repeated observations.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
    #[non_exhaustive]
    pub enum ObservationNoise {
        /// The default noise level chosen by Vertex AI.
        #[default]
        #[serde(rename = "OBSERVATION_NOISE_UNSPECIFIED")]
        Unspecified,
        /// Vertex AI assumes that the objective function is (nearly)
        /// perfectly reproducible, and will never repeat the same Trial
        /// parameters.
        #[serde(rename = "LOW")]
        Low,
        /// Vertex AI will estimate the amount of noise in metric evaluations,
        /// it may repeat the same Trial parameters more than once.
        #[serde(rename = "HIGH")]
        High,
        /// A value not known to this version of the library.
        #[serde(other, skip_serializing)]
        Unknown,
    }

    /// Indicates which measurement to use if/when the service automatically
    /// selects the final measurement from previously reported intermediate
    /// measurements.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
    #[non_exhaustive]
    pub enum MeasurementSelectionType {
        /// Will be treated as LAST_MEASUREMENT.
        #[default]
        #[serde(rename = "MEASUREMENT_SELECTION_TYPE_UNSPECIFIED")]
        Unspecified,
        /// Use the last measurement reported.
        #[serde(rename = "LAST_MEASUREMENT")]
        LastMeasurement,
        /// Use the best measurement reported.
        #[serde(rename = "BEST_MEASUREMENT")]
        BestMeasurement,
        /// A value not known to this version of the library.
        #[serde(other, skip_serializing)]
        Unknown,
    }
}

/// A message representing a Measurement of a Trial. A Measurement contains
/// the Metrics got by executing a Trial using suggested hyperparameter
/// values.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Measurement {
    /// Output only. Time that the Trial has been running at the point of this
    /// Measurement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_duration: Option<wkt::Duration>,

    /// Output only. The number of steps the machine learning model has been
    /// trained for. Must be non-negative.
    #[serde(skip_serializing_if = "is_default")]
    #[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")]
    pub step_count: i64,

    /// Output only. A list of metrics got by evaluating the objective
    /// functions using suggested Parameter values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<measurement::Metric>,
}

impl Measurement {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [elapsed_duration][Measurement::elapsed_duration].
    pub fn set_elapsed_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.elapsed_duration = Some(v.into());
        self
    }

    /// Sets the value of [step_count][Measurement::step_count].
    pub fn set_step_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.step_count = v.into();
        self
    }

    /// Sets the value of [metrics][Measurement::metrics].
    pub fn set_metrics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<measurement::Metric>,
    {
        self.metrics = v.into_iter().map(Into::into).collect();
        self
    }
}

/// Defines additional types related to [Measurement].
pub mod measurement {
    /// A message representing a metric in the measurement.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Metric {
        /// Output only. The ID of the Metric. The Metric should be defined in
        /// the study spec.
        #[serde(skip_serializing_if = "String::is_empty")]
        pub metric_id: String,

        /// Output only. The value for this metric.
        pub value: f64,
    }

    impl Metric {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [metric_id][Metric::metric_id].
        pub fn set_metric_id<T: Into<String>>(mut self, v: T) -> Self {
            self.metric_id = v.into();
            self
        }

        /// Sets the value of [value][Metric::value].
        pub fn set_value(mut self, v: f64) -> Self {
            self.value = v;
            self
        }
    }
}

/// Request message for [VizierService::get_study][crate::client::VizierService::get_study].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetStudyRequest {
    /// Required. The name of the Study resource.
    /// Format: `projects/{project}/locations/{location}/studies/{study}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl GetStudyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GetStudyRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for [VizierService::create_study][crate::client::VizierService::create_study].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateStudyRequest {
    /// Required. The resource name of the Location to create the
    /// CustomJob in. Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// Required. The Study configuration used to create the Study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study: Option<Study>,
}

impl CreateStudyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][CreateStudyRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [study][CreateStudyRequest::study].
    pub fn set_study<T: Into<Study>>(mut self, v: T) -> Self {
        self.study = Some(v.into());
        self
    }

    /// Sets or clears the value of [study][CreateStudyRequest::study].
    pub fn set_or_clear_study<T: Into<Study>>(mut self, v: Option<T>) -> Self {
        self.study = v.map(Into::into);
        self
    }
}

/// Request message for [VizierService::list_studies][crate::client::VizierService::list_studies].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListStudiesRequest {
    /// Required. The resource name of the Location to list the Study from.
    /// Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// Optional. A page token to request the next page of results.
    /// If unspecified, there are no subsequent pages.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,

    /// Optional. The maximum number of studies to return per "page" of
    /// results. If unspecified, service will pick an appropriate default.
    #[serde(skip_serializing_if = "is_default")]
    pub page_size: i32,
}

impl ListStudiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][ListStudiesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_token][ListStudiesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListStudiesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }
}

/// Response message for [VizierService::list_studies][crate::client::VizierService::list_studies].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListStudiesResponse {
    /// The studies associated with the project.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub studies: Vec<Study>,

    /// Passes this token as the `page_token` field of the request for a
    /// subsequent call. If this field is omitted, there are no subsequent
    /// pages.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListStudiesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [studies][ListStudiesResponse::studies].
    pub fn set_studies<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Study>,
    {
        self.studies = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [next_page_token][ListStudiesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

/// Request message for [VizierService::delete_study][crate::client::VizierService::delete_study].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteStudyRequest {
    /// Required. The name of the Study resource to be deleted.
    /// Format: `projects/{project}/locations/{location}/studies/{study}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl DeleteStudyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DeleteStudyRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for [VizierService::lookup_study][crate::client::VizierService::lookup_study].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LookupStudyRequest {
    /// Required. The resource name of the Location to get the Study from.
    /// Format: `projects/{project}/locations/{location}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// Required. The user-defined display name of the Study
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,
}

impl LookupStudyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][LookupStudyRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [display_name][LookupStudyRequest::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }
}

/// Request message for [VizierService::suggest_trials][crate::client::VizierService::suggest_trials].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SuggestTrialsRequest {
    /// Required. The project and location that the Study belongs to.
    /// Format: `projects/{project}/locations/{location}/studies/{study}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// Required. The number of suggestions requested. It must be positive.
    #[serde(skip_serializing_if = "is_default")]
    pub suggestion_count: i32,

    /// Required. The identifier of the client that is requesting the
    /// suggestion.
    ///
    /// If multiple SuggestTrialsRequests have the same `client_id`,
    /// the service will return the identical suggested Trial if the Trial is
    /// pending, and provide a new Trial if the last suggested Trial was
    /// completed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_id: String,
}

impl SuggestTrialsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][SuggestTrialsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [suggestion_count][SuggestTrialsRequest::suggestion_count].
    pub fn set_suggestion_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.suggestion_count = v.into();
        self
    }

    /// Sets the value of [client_id][SuggestTrialsRequest::client_id].
    pub fn set_client_id<T: Into<String>>(mut self, v: T) -> Self {
        self.client_id = v.into();
        self
    }
}

/// Response message for [VizierService::suggest_trials][crate::client::VizierService::suggest_trials].
///
/// This is the result of the long-running operation returned by
/// `suggest_trials`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SuggestTrialsResponse {
    /// A list of Trials.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trials: Vec<Trial>,

    /// The state of the Study.
    #[serde(skip_serializing_if = "is_default")]
    pub study_state: study::State,

    /// The time at which the operation was started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<wkt::Timestamp>,

    /// The time at which operation processing completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<wkt::Timestamp>,
}

impl SuggestTrialsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [trials][SuggestTrialsResponse::trials].
    pub fn set_trials<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Trial>,
    {
        self.trials = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [study_state][SuggestTrialsResponse::study_state].
    pub fn set_study_state<T: Into<study::State>>(mut self, v: T) -> Self {
        self.study_state = v.into();
        self
    }

    /// Sets the value of [start_time][SuggestTrialsResponse::start_time].
    pub fn set_start_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][SuggestTrialsResponse::end_time].
    pub fn set_end_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }
}

impl wkt::message::Message for SuggestTrialsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1beta1.SuggestTrialsResponse"
    }
}

/// Details of operations that perform Trials suggestion.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SuggestTrialsMetadata {
    /// Operation metadata for suggesting Trials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_metadata: Option<GenericOperationMetadata>,

    /// The identifier of the client that is requesting the suggestion.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_id: String,
}

impl SuggestTrialsMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [generic_metadata][SuggestTrialsMetadata::generic_metadata].
    pub fn set_generic_metadata<T: Into<GenericOperationMetadata>>(mut self, v: T) -> Self {
        self.generic_metadata = Some(v.into());
        self
    }

    /// Sets the value of [client_id][SuggestTrialsMetadata::client_id].
    pub fn set_client_id<T: Into<String>>(mut self, v: T) -> Self {
        self.client_id = v.into();
        self
    }
}

impl wkt::message::Message for SuggestTrialsMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1beta1.SuggestTrialsMetadata"
    }
}

/// Generic Metadata shared by all operations.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GenericOperationMetadata {
    /// Output only. Partial failures encountered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partial_failures: Vec<gax::error::rpc::Status>,

    /// Output only. Time when the operation was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<wkt::Timestamp>,

    /// Output only. Time when the operation was updated for the last time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<wkt::Timestamp>,
}

impl GenericOperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [create_time][GenericOperationMetadata::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][GenericOperationMetadata::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }
}

/// Request message for [VizierService::create_trial][crate::client::VizierService::create_trial].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateTrialRequest {
    /// Required. The resource name of the Study to create the Trial in.
    /// Format: `projects/{project}/locations/{location}/studies/{study}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// Required. The Trial to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial: Option<Trial>,
}

impl CreateTrialRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][CreateTrialRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [trial][CreateTrialRequest::trial].
    pub fn set_trial<T: Into<Trial>>(mut self, v: T) -> Self {
        self.trial = Some(v.into());
        self
    }

    /// Sets or clears the value of [trial][CreateTrialRequest::trial].
    pub fn set_or_clear_trial<T: Into<Trial>>(mut self, v: Option<T>) -> Self {
        self.trial = v.map(Into::into);
        self
    }
}

/// Request message for [VizierService::get_trial][crate::client::VizierService::get_trial].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetTrialRequest {
    /// Required. The name of the Trial resource.
    /// Format:
    /// `projects/{project}/locations/{location}/studies/{study}/trials/{trial}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl GetTrialRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][GetTrialRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for [VizierService::list_trials][crate::client::VizierService::list_trials].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTrialsRequest {
    /// Required. The resource name of the Study to list the Trial from.
    /// Format: `projects/{project}/locations/{location}/studies/{study}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,

    /// Optional. A page token to request the next page of results.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,

    /// Optional. The number of Trials to retrieve per "page" of results.
    #[serde(skip_serializing_if = "is_default")]
    pub page_size: i32,
}

impl ListTrialsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][ListTrialsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_token][ListTrialsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListTrialsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }
}

/// Response message for [VizierService::list_trials][crate::client::VizierService::list_trials].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTrialsResponse {
    /// The Trials associated with the Study.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trials: Vec<Trial>,

    /// Pass this token as the `page_token` field of the request for a
    /// subsequent call. If this field is omitted, there are no subsequent
    /// pages.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListTrialsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [trials][ListTrialsResponse::trials].
    pub fn set_trials<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Trial>,
    {
        self.trials = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [next_page_token][ListTrialsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

/// Request message for [VizierService::add_trial_measurement][crate::client::VizierService::add_trial_measurement].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddTrialMeasurementRequest {
    /// Required. The name of the trial to add measurement.
    /// Format:
    /// `projects/{project}/locations/{location}/studies/{study}/trials/{trial}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trial_name: String,

    /// Required. The measurement to be added to a Trial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement: Option<Measurement>,
}

impl AddTrialMeasurementRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [trial_name][AddTrialMeasurementRequest::trial_name].
    pub fn set_trial_name<T: Into<String>>(mut self, v: T) -> Self {
        self.trial_name = v.into();
        self
    }

    /// Sets the value of [measurement][AddTrialMeasurementRequest::measurement].
    pub fn set_measurement<T: Into<Measurement>>(mut self, v: T) -> Self {
        self.measurement = Some(v.into());
        self
    }

    /// Sets or clears the value of [measurement][AddTrialMeasurementRequest::measurement].
    pub fn set_or_clear_measurement<T: Into<Measurement>>(mut self, v: Option<T>) -> Self {
        self.measurement = v.map(Into::into);
        self
    }
}

/// Request message for [VizierService::complete_trial][crate::client::VizierService::complete_trial].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CompleteTrialRequest {
    /// Required. The Trial's name.
    /// Format:
    /// `projects/{project}/locations/{location}/studies/{study}/trials/{trial}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Optional. If provided, it will be used as the completed Trial's
    /// final_measurement; Otherwise, the service will auto-select a
    /// previously reported measurement as the final-measurement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_measurement: Option<Measurement>,

    /// Optional. True if the Trial cannot be run with the given Parameter, and
    /// final_measurement will be ignored.
    #[serde(skip_serializing_if = "is_default")]
    pub trial_infeasible: bool,

    /// Optional. A human readable reason why the trial was infeasible. This
    /// should only be provided if `trial_infeasible` is true.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub infeasible_reason: String,
}

impl CompleteTrialRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CompleteTrialRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [final_measurement][CompleteTrialRequest::final_measurement].
    pub fn set_final_measurement<T: Into<Measurement>>(mut self, v: T) -> Self {
        self.final_measurement = Some(v.into());
        self
    }

    /// Sets or clears the value of [final_measurement][CompleteTrialRequest::final_measurement].
    pub fn set_or_clear_final_measurement<T: Into<Measurement>>(mut self, v: Option<T>) -> Self {
        self.final_measurement = v.map(Into::into);
        self
    }

    /// Sets the value of [trial_infeasible][CompleteTrialRequest::trial_infeasible].
    pub fn set_trial_infeasible<T: Into<bool>>(mut self, v: T) -> Self {
        self.trial_infeasible = v.into();
        self
    }

    /// Sets the value of [infeasible_reason][CompleteTrialRequest::infeasible_reason].
    pub fn set_infeasible_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.infeasible_reason = v.into();
        self
    }
}

/// Request message for [VizierService::delete_trial][crate::client::VizierService::delete_trial].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteTrialRequest {
    /// Required. The Trial's name.
    /// Format:
    /// `projects/{project}/locations/{location}/studies/{study}/trials/{trial}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl DeleteTrialRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DeleteTrialRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for [VizierService::check_trial_early_stopping_state][crate::client::VizierService::check_trial_early_stopping_state].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckTrialEarlyStoppingStateRequest {
    /// Required. The Trial's name.
    /// Format:
    /// `projects/{project}/locations/{location}/studies/{study}/trials/{trial}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trial_name: String,
}

impl CheckTrialEarlyStoppingStateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [trial_name][CheckTrialEarlyStoppingStateRequest::trial_name].
    pub fn set_trial_name<T: Into<String>>(mut self, v: T) -> Self {
        self.trial_name = v.into();
        self
    }
}

/// Response message for [VizierService::check_trial_early_stopping_state][crate::client::VizierService::check_trial_early_stopping_state].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckTrialEarlyStoppingStateResponse {
    /// True if the Trial should stop.
    #[serde(skip_serializing_if = "is_default")]
    pub should_stop: bool,
}

impl CheckTrialEarlyStoppingStateResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [should_stop][CheckTrialEarlyStoppingStateResponse::should_stop].
    pub fn set_should_stop<T: Into<bool>>(mut self, v: T) -> Self {
        self.should_stop = v.into();
        self
    }
}

impl wkt::message::Message for CheckTrialEarlyStoppingStateResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1beta1.CheckTrialEarlyStoppingStateResponse"
    }
}

/// This message will be placed in the metadata field of a
/// google.longrunning.Operation associated with a
/// CheckTrialEarlyStoppingState request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckTrialEarlyStoppingStateMetatdata {
    /// Operation metadata for suggesting Trials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_metadata: Option<GenericOperationMetadata>,

    /// The name of the Study that the Trial belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub study: String,

    /// The Trial name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trial: String,
}

impl CheckTrialEarlyStoppingStateMetatdata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [generic_metadata][CheckTrialEarlyStoppingStateMetatdata::generic_metadata].
    pub fn set_generic_metadata<T: Into<GenericOperationMetadata>>(mut self, v: T) -> Self {
        self.generic_metadata = Some(v.into());
        self
    }

    /// Sets the value of [study][CheckTrialEarlyStoppingStateMetatdata::study].
    pub fn set_study<T: Into<String>>(mut self, v: T) -> Self {
        self.study = v.into();
        self
    }

    /// Sets the value of [trial][CheckTrialEarlyStoppingStateMetatdata::trial].
    pub fn set_trial<T: Into<String>>(mut self, v: T) -> Self {
        self.trial = v.into();
        self
    }
}

impl wkt::message::Message for CheckTrialEarlyStoppingStateMetatdata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.aiplatform.v1beta1.CheckTrialEarlyStoppingStateMetatdata"
    }
}

/// Request message for [VizierService::stop_trial][crate::client::VizierService::stop_trial].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StopTrialRequest {
    /// Required. The Trial's name.
    /// Format:
    /// `projects/{project}/locations/{location}/studies/{study}/trials/{trial}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl StopTrialRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][StopTrialRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for [VizierService::list_optimal_trials][crate::client::VizierService::list_optimal_trials].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOptimalTrialsRequest {
    /// Required. The name of the Study that the optimal Trial belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,
}

impl ListOptimalTrialsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][ListOptimalTrialsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// Response message for [VizierService::list_optimal_trials][crate::client::VizierService::list_optimal_trials].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOptimalTrialsResponse {
    /// The pareto-optimal Trials for multiple objective Study or the
    /// optimal trial for single objective Study. The definition of
    /// pareto-optimal can be checked in wiki page.
    /// <https://en.wikipedia.org/wiki/Pareto_efficiency>
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub optimal_trials: Vec<Trial>,
}

impl ListOptimalTrialsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [optimal_trials][ListOptimalTrialsResponse::optimal_trials].
    pub fn set_optimal_trials<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Trial>,
    {
        self.optimal_trials = v.into_iter().map(Into::into).collect();
        self
    }
}
