use crossterm::style::Color;

/// Foreground/background pair taken from a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// Pair of 256-color palette indices.
    pub const fn ansi(fg: u8, bg: u8) -> Self {
        Self::new(Color::AnsiValue(fg), Color::AnsiValue(bg))
    }
}

/// One colored unit of prompt output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub foreground: Color,
    pub background: Color,
}

impl Segment {
    pub fn new(content: impl Into<String>, colors: ColorPair) -> Self {
        Self {
            content: content.into(),
            foreground: colors.fg,
            background: colors.bg,
        }
    }
}

/// Receiver of rendered segments, keyed by the segment kind.
pub trait SegmentSink {
    fn append_segment(&mut self, key: &str, segment: Segment);
}

impl SegmentSink for Vec<(String, Segment)> {
    fn append_segment(&mut self, key: &str, segment: Segment) {
        self.push((key.to_string(), segment));
    }
}
