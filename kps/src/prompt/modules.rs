use crate::prompt::context::PromptContext;
use kps_types::SegmentSink;

pub mod kubernetes;

pub trait PromptModule: Send + Sync + std::fmt::Debug {
    /// Return the name of the module (e.g., "kubernetes")
    fn name(&self) -> &str;

    /// Append this module's segments to `sink`.
    /// Appending nothing hides the module.
    fn render(&self, context: &PromptContext<'_>, sink: &mut dyn SegmentSink);
}
