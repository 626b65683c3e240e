use super::null_as_default;
use kps_types::{KpsError, KpsResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContextDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub cluster: String,
    #[serde(deserialize_with = "null_as_default")]
    pub namespace: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KubeContext {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub context: ContextDetails,
}

/// The subset of a kubeconfig file the prompt cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KubeConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub contexts: Vec<KubeContext>,
    #[serde(rename = "current-context", deserialize_with = "null_as_default")]
    pub current_context: String,
}

/// Candidate kubeconfig files in lookup order: every `KUBECONFIG` entry
/// (empty entries included) followed by `~/.kube/config`.
pub fn search_paths(kubeconfig: Option<&str>, home_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = kubeconfig
        .map(|value| value.split(':').map(PathBuf::from).collect())
        .unwrap_or_default();
    if let Some(home) = home_dir {
        paths.push(home.join(".kube").join("config"));
    }
    paths
}

impl KubeConfig {
    /// Read a single kubeconfig file. Contexts and current context are
    /// returned as written, without defaulting.
    pub fn read(path: &Path) -> KpsResult<Self> {
        let absolute = std::path::absolute(path).map_err(|source| KpsError::InvalidPath {
            path: path.display().to_string(),
            source,
        })?;
        let content =
            std::fs::read(&absolute).map_err(|source| KpsError::from_io(&absolute, source))?;
        Self::parse(&absolute, &content)
    }

    pub fn parse(path: &Path, content: &[u8]) -> KpsResult<Self> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(KubeConfig::default());
        }
        serde_yaml::from_slice(content).map_err(|source| KpsError::parse(path, source))
    }

    /// Read and merge every readable file. Unreadable or malformed files
    /// contribute nothing.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut config = KubeConfig::default();
        for path in paths {
            match KubeConfig::read(path.as_ref()) {
                Ok(found) => config.merge(found),
                Err(err) => debug!("skip kubeconfig: {}", err),
            }
        }
        config
    }

    /// Append `other`'s contexts; the first non-empty current context wins.
    pub fn merge(&mut self, other: KubeConfig) {
        self.contexts.extend(other.contexts);
        if self.current_context.is_empty() {
            self.current_context = other.current_context;
        }
    }

    /// The context entry named by `current-context`, if any.
    pub fn current(&self) -> Option<&KubeContext> {
        if self.current_context.is_empty() {
            return None;
        }
        self.contexts
            .iter()
            .find(|context| context.name == self.current_context)
    }
}
