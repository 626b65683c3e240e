use crate::config::SegmentConfig;
use crate::kube::ShortenOptions;
use kps_types::Theme;

/// Feature flags supplied by the host's argument parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptArgs {
    pub shorten_gke_names: bool,
    pub shorten_eks_names: bool,
    pub show_namespace: bool,
}

impl PromptArgs {
    pub fn shorten_options(&self) -> ShortenOptions {
        ShortenOptions {
            gke: self.shorten_gke_names,
            eks: self.shorten_eks_names,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub config: &'a SegmentConfig,
    pub args: PromptArgs,
    pub theme: &'a Theme,
}
