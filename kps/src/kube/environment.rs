use super::null_as_default;
use kps_types::{ColorPair, KpsError, KpsResult, Theme};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Environment kinds, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentType {
    Prod,
    Staging,
    Qat,
    Sandbox,
    Dev,
}

impl EnvironmentType {
    pub const PRIORITY: [EnvironmentType; 5] = [
        EnvironmentType::Prod,
        EnvironmentType::Staging,
        EnvironmentType::Qat,
        EnvironmentType::Sandbox,
        EnvironmentType::Dev,
    ];

    /// The `type` value used for this kind in the rules file.
    pub fn as_str(self) -> &'static str {
        match self {
            EnvironmentType::Prod => "PROD",
            EnvironmentType::Staging => "Staging",
            EnvironmentType::Qat => "QAT",
            EnvironmentType::Sandbox => "sandbox",
            EnvironmentType::Dev => "dev",
        }
    }

    /// Label prefix and suffix wrapped around the cluster name.
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            EnvironmentType::Prod => ("PROD->>!!! ", " !!!<<-PROD"),
            EnvironmentType::Staging => ("", " STAGING"),
            EnvironmentType::Qat => ("", " QAT"),
            EnvironmentType::Sandbox => ("", " SANDBOX"),
            EnvironmentType::Dev => ("", " DEV"),
        }
    }

    pub fn colors(self, theme: &Theme) -> ColorPair {
        match self {
            EnvironmentType::Prod => theme.kube_prod,
            EnvironmentType::Staging | EnvironmentType::Qat => theme.shell_var,
            EnvironmentType::Sandbox | EnvironmentType::Dev => theme.kube_cluster,
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnvironmentRule {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contains: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub prefix: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub suffix: Vec<String>,
}

impl EnvironmentRule {
    /// Exact, case-sensitive substring/prefix/suffix test.
    pub fn matches(&self, cluster: &str) -> bool {
        self.contains.iter().any(|s| cluster.contains(s.as_str()))
            || self.prefix.iter().any(|s| cluster.starts_with(s.as_str()))
            || self.suffix.iter().any(|s| cluster.ends_with(s.as_str()))
    }
}

/// Classification rules plus the substrings hidden from display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnvironmentRules {
    #[serde(deserialize_with = "null_as_default")]
    pub environments: Vec<EnvironmentRule>,
    #[serde(deserialize_with = "null_as_default")]
    pub remove: Vec<String>,
}

impl EnvironmentRules {
    /// Load the rules file. A missing file, a directory, or a file that
    /// fails to read or parse yields an empty rule set.
    pub fn read(path: &Path) -> Self {
        if !path.is_file() {
            debug!("no environment rules at {}", path.display());
            return EnvironmentRules::default();
        }
        match Self::try_read(path) {
            Ok(rules) => {
                if rules.is_empty() {
                    debug!("environment rules at {} are empty", path.display());
                }
                rules
            }
            Err(err) => {
                warn!("ignoring environment rules: {}", err);
                EnvironmentRules::default()
            }
        }
    }

    pub fn try_read(path: &Path) -> KpsResult<Self> {
        let content = std::fs::read(path).map_err(|source| KpsError::from_io(path, source))?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &[u8]) -> KpsResult<Self> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(EnvironmentRules::default());
        }
        serde_yaml::from_slice(content).map_err(|source| KpsError::parse(path, source))
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty() && self.remove.is_empty()
    }

    /// First environment type, in priority order, with a matching rule.
    pub fn classify(&self, cluster: &str) -> Option<EnvironmentType> {
        EnvironmentType::PRIORITY
            .into_iter()
            .find(|kind| self.matches(*kind, cluster))
    }

    fn matches(&self, kind: EnvironmentType, cluster: &str) -> bool {
        self.environments
            .iter()
            .filter(|rule| rule.kind == kind.as_str())
            .any(|rule| {
                let hit = rule.matches(cluster);
                if hit {
                    debug!("{} matched rule {:?} ({})", cluster, rule.name, kind);
                }
                hit
            })
    }

    /// Remove every occurrence of each `remove` entry, in list order.
    pub fn strip(&self, cluster: &str) -> String {
        self.remove
            .iter()
            .filter(|s| !s.is_empty())
            .fold(cluster.to_string(), |name, s| name.replace(s.as_str(), ""))
    }
}
