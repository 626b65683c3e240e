//! Kubeconfig loading, cluster name shortening and environment classification.

use serde::{Deserialize, Deserializer};

pub mod environment;
pub mod kubeconfig;
pub mod names;

pub use environment::{EnvironmentRule, EnvironmentRules, EnvironmentType};
pub use kubeconfig::{ContextDetails, KubeConfig, KubeContext};
pub use names::{ShortenOptions, normalize_cluster_name};

/// Treat an explicit YAML `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
