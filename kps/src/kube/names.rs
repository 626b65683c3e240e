//! Cosmetic shortening of managed-cluster context names.

use regex::Regex;

/// Prefix of contexts created by `gcloud container clusters get-credentials`.
const GKE_PREFIX: &str = "gke";

static EKS_ARN_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^arn:aws:eks:[[:alnum:]-]+:[[:digit:]]+:cluster/(.*)$").unwrap()
});

/// Which shortening transforms the host enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortenOptions {
    pub gke: bool,
    pub eks: bool,
}

/// Apply the enabled transforms in order: GKE first, then EKS.
pub fn normalize_cluster_name(name: &str, options: ShortenOptions) -> String {
    let mut cluster = name.to_string();
    if options.gke
        && let Some(short) = shorten_gke_name(&cluster)
    {
        cluster = short;
    }
    if options.eks
        && let Some(short) = shorten_eks_name(&cluster)
    {
        cluster = short;
    }
    cluster
}

/// `gke_project_zone_cluster-01` becomes `cluster-01`. Names with fewer
/// than four `_` segments are left alone.
pub fn shorten_gke_name(name: &str) -> Option<String> {
    if !name.starts_with(GKE_PREFIX) {
        return None;
    }
    let segments: Vec<&str> = name.split('_').collect();
    if segments.len() > 3 {
        Some(segments[3..].join("_"))
    } else {
        None
    }
}

/// `arn:aws:eks:us-east-1:123456789012:cluster/eks-infra` becomes `eks-infra`.
pub fn shorten_eks_name(name: &str) -> Option<String> {
    EKS_ARN_REGEX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
