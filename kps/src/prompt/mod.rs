use crossterm::style::{Stylize, style};
use kps_types::{Segment, SegmentSink};
use std::io::{self, Write};
use tracing::debug;

pub mod context;
pub mod modules;

use context::PromptContext;
use modules::PromptModule;
use modules::kubernetes::KubernetesModule;


/// Host side of the prompt: runs each module and collects the segments
/// they append, in order.
#[derive(Debug)]
pub struct Prompt {
    modules: Vec<Box<dyn PromptModule>>,
    segments: Vec<(String, Segment)>,
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt {
    pub fn new() -> Prompt {
        Prompt::with_modules(vec![Box::new(KubernetesModule::new())])
    }

    pub fn with_modules(modules: Vec<Box<dyn PromptModule>>) -> Prompt {
        Prompt {
            modules,
            segments: Vec::new(),
        }
    }

    /// Render every module from scratch. Previous segments are discarded.
    pub fn render(&mut self, context: &PromptContext<'_>) -> &[(String, Segment)] {
        self.segments.clear();
        for module in &self.modules {
            let before = self.segments.len();
            module.render(context, &mut self.segments);
            debug!(
                "module {} appended {} segment(s)",
                module.name(),
                self.segments.len() - before
            );
        }
        &self.segments
    }

    pub fn segments(&self) -> &[(String, Segment)] {
        &self.segments
    }

    /// Write the collected segments. Styled output pads each segment and
    /// paints it with its colors; plain output separates contents by a space.
    pub fn print_segments<W: Write>(&self, out: &mut W, plain: bool) -> io::Result<()> {
        if plain {
            let contents: Vec<&str> = self
                .segments
                .iter()
                .map(|(_, segment)| segment.content.as_str())
                .collect();
            write!(out, "{}", contents.join(" "))?;
        } else {
            for (_, segment) in &self.segments {
                let block = style(format!(" {} ", segment.content))
                    .with(segment.foreground)
                    .on(segment.background);
                write!(out, "{}", block)?;
            }
        }
        out.flush()
    }
}

impl SegmentSink for Prompt {
    fn append_segment(&mut self, key: &str, segment: Segment) {
        self.segments.append_segment(key, segment);
    }
}
