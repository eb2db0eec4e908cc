use crate::renderer::tree::DisplayTree;

/// Configuration context for rendering operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Level of the heading that names a member. Sub-headings such as
    /// "Metadata" and "Parameters" sit one level deeper.
    pub heading_level: u8,
    /// Keep internal and private members when rendering a whole contract.
    pub show_internal: bool,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            heading_level: 2,
            show_internal: false,
        }
    }

    pub fn with_heading_level(&self, heading_level: u8) -> Self {
        Self {
            heading_level: heading_level.clamp(1, 6),
            show_internal: self.show_internal,
        }
    }

    pub fn with_show_internal(&self, show_internal: bool) -> Self {
        Self {
            heading_level: self.heading_level,
            show_internal,
        }
    }

    pub fn nested(&self) -> Self {
        self.with_heading_level(self.heading_level.saturating_add(1))
    }

    pub fn sub_heading_level(&self) -> u8 {
        self.heading_level.saturating_add(1).min(6)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Output format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Html,
    Markdown,
    Text,
    /// The display tree itself, serialized as JSON.
    Json,
}

/// Core rendering trait for all descriptors
pub trait Render {
    fn render(&self, context: &RenderContext) -> DisplayTree;
}
