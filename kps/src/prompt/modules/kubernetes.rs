use crate::kube::{EnvironmentRules, KubeConfig, normalize_cluster_name};
use crate::prompt::context::PromptContext;
use crate::prompt::modules::PromptModule;
use kps_types::{Segment, SegmentSink, Theme};
use tracing::debug;

pub const CLUSTER_SEGMENT: &str = "kube-cluster";
pub const NAMESPACE_SEGMENT: &str = "kube-namespace";

#[derive(Debug)]
pub struct KubernetesModule;

impl Default for KubernetesModule {
    fn default() -> Self {
        Self::new()
    }
}

impl KubernetesModule {
    pub fn new() -> Self {
        Self
    }
}

impl PromptModule for KubernetesModule {
    fn name(&self) -> &str {
        "kubernetes"
    }

    fn render(&self, context: &PromptContext<'_>, sink: &mut dyn SegmentSink) {
        let kubeconfig = KubeConfig::load(context.config.kubeconfig_paths());
        let Some(current) = kubeconfig.current() else {
            debug!("no current kube context");
            return;
        };

        let cluster = normalize_cluster_name(&current.name, context.args.shorten_options());
        let rules = context
            .config
            .environments_file()
            .map(EnvironmentRules::read)
            .unwrap_or_default();

        let Some(segment) = cluster_segment(&cluster, &rules, context.theme) else {
            return;
        };
        sink.append_segment(CLUSTER_SEGMENT, segment);

        let namespace = &current.context.namespace;
        if context.args.show_namespace && !namespace.is_empty() {
            sink.append_segment(
                NAMESPACE_SEGMENT,
                Segment::new(namespace.as_str(), context.theme.kube_namespace),
            );
        }
    }
}

/// Build the labelled cluster segment for an already normalized name.
/// Returns None when the name is empty or no environment rule matches.
pub fn cluster_segment(
    cluster: &str,
    rules: &EnvironmentRules,
    theme: &Theme,
) -> Option<Segment> {
    if cluster.is_empty() {
        return None;
    }
    let Some(environment) = rules.classify(cluster) else {
        debug!("{} is not a known environment", cluster);
        return None;
    };

    let (label_b, label_e) = environment.labels();
    let content = format!("{}{}{}", label_b, rules.strip(cluster), label_e);
    Some(Segment::new(content, environment.colors(theme)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kube::EnvironmentRule;

    fn prod_rules(remove: &[&str]) -> EnvironmentRules {
        EnvironmentRules {
            environments: vec![EnvironmentRule {
                kind: "PROD".to_string(),
                name: "production".to_string(),
                contains: vec!["prod".to_string()],
                ..Default::default()
            }],
            remove: remove.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn prod_segment_is_wrapped() {
        let theme = Theme::default();
        let segment = cluster_segment("prod-main", &prod_rules(&[]), &theme).unwrap();

        assert_eq!(segment.content, "PROD->>!!! prod-main !!!<<-PROD");
        assert_eq!(segment.foreground, theme.kube_prod.fg);
        assert_eq!(segment.background, theme.kube_prod.bg);
    }

    #[test]
    fn removal_happens_after_classification() {
        let theme = Theme::default();
        let segment =
            cluster_segment("prod-main-cluster", &prod_rules(&["-cluster"]), &theme).unwrap();
        assert_eq!(segment.content, "PROD->>!!! prod-main !!!<<-PROD");

        // The removed text is still visible to the classifier.
        let segment = cluster_segment("prod-main", &prod_rules(&["prod-"]), &theme).unwrap();
        assert_eq!(segment.content, "PROD->>!!! main !!!<<-PROD");
    }

    #[test]
    fn unmatched_cluster_has_no_segment() {
        assert!(cluster_segment("dev-box", &prod_rules(&[]), &Theme::default()).is_none());
    }

    #[test]
    fn empty_cluster_has_no_segment() {
        let rules = EnvironmentRules {
            environments: vec![EnvironmentRule {
                kind: "dev".to_string(),
                contains: vec![String::new()],
                ..Default::default()
            }],
            remove: vec![],
        };
        assert!(cluster_segment("", &rules, &Theme::default()).is_none());
    }
}
