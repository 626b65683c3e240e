use crate::kube::kubeconfig::search_paths;
use std::path::{Path, PathBuf};

/// Colon-separated kubeconfig search path.
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Overrides the location of the environment rules file.
pub const ENVIRONMENTS_ENV: &str = "KPS_ENVIRONMENTS";

/// Rules file name, relative to the home directory.
pub const ENVIRONMENTS_FILE: &str = ".kubectl_context_ps1_environments";

/// File locations the kubernetes segment reads on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentConfig {
    kubeconfig_paths: Vec<PathBuf>,
    environments_file: Option<PathBuf>,
}

impl SegmentConfig {
    pub fn new(kubeconfig_paths: Vec<PathBuf>, environments_file: Option<PathBuf>) -> Self {
        Self {
            kubeconfig_paths,
            environments_file,
        }
    }

    /// Build the config from injected process state. `getter` looks up
    /// environment variables, `home_dir` is the user's home directory if known.
    pub fn from_getter(
        mut getter: impl FnMut(&str) -> Option<String>,
        home_dir: Option<&Path>,
    ) -> Self {
        let kubeconfig = getter(KUBECONFIG_ENV);
        let kubeconfig_paths = search_paths(kubeconfig.as_deref(), home_dir);

        let environments_file = getter(ENVIRONMENTS_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| home_dir.map(|home| home.join(ENVIRONMENTS_FILE)));

        SegmentConfig::new(kubeconfig_paths, environments_file)
    }

    pub fn kubeconfig_paths(&self) -> &[PathBuf] {
        &self.kubeconfig_paths
    }

    pub fn environments_file(&self) -> Option<&Path> {
        self.environments_file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_getter_uses_home_defaults() {
        let home = PathBuf::from("/home/doge");
        let cfg = SegmentConfig::from_getter(|_| None, Some(&home));

        assert_eq!(
            cfg.kubeconfig_paths(),
            &[PathBuf::from("/home/doge/.kube/config")]
        );
        assert_eq!(
            cfg.environments_file(),
            Some(Path::new("/home/doge/.kubectl_context_ps1_environments"))
        );
    }

    #[test]
    fn from_getter_prepends_kubeconfig_entries() {
        let home = PathBuf::from("/home/doge");
        let getter = |key: &str| match key {
            "KUBECONFIG" => Some("/a/config:/b/config".to_string()),
            _ => None,
        };
        let cfg = SegmentConfig::from_getter(getter, Some(&home));

        assert_eq!(
            cfg.kubeconfig_paths(),
            &[
                PathBuf::from("/a/config"),
                PathBuf::from("/b/config"),
                PathBuf::from("/home/doge/.kube/config"),
            ]
        );
    }

    #[test]
    fn from_getter_honours_environments_override() {
        let home = PathBuf::from("/home/doge");
        let getter = |key: &str| match key {
            "KPS_ENVIRONMENTS" => Some("/etc/kps/environments.yaml".to_string()),
            _ => None,
        };
        let cfg = SegmentConfig::from_getter(getter, Some(&home));

        assert_eq!(
            cfg.environments_file(),
            Some(Path::new("/etc/kps/environments.yaml"))
        );
    }

    #[test]
    fn from_getter_ignores_blank_override() {
        let home = PathBuf::from("/home/doge");
        let getter = |key: &str| match key {
            "KPS_ENVIRONMENTS" => Some("  ".to_string()),
            _ => None,
        };
        let cfg = SegmentConfig::from_getter(getter, Some(&home));

        assert_eq!(
            cfg.environments_file(),
            Some(Path::new("/home/doge/.kubectl_context_ps1_environments"))
        );
    }

    #[test]
    fn from_getter_without_home() {
        let cfg = SegmentConfig::from_getter(|_| None, None);
        assert!(cfg.kubeconfig_paths().is_empty());
        assert!(cfg.environments_file().is_none());
    }
}
