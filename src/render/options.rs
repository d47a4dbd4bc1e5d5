//! Rendering options and configuration.

/// Options for the Markdown review rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with identification metadata
    pub include_frontmatter: bool,

    /// Include the preparation block at the end
    pub include_preparation: bool,

    /// Maximum heading level (1-6)
    pub max_heading_level: u8,

    /// Collect document statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable the preparation block.
    pub fn with_preparation(mut self, include: bool) -> Self {
        self.include_preparation = include;
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            include_preparation: true,
            max_heading_level: 6,
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(!options.include_frontmatter);
        assert!(options.include_preparation);
        assert_eq!(options.max_heading_level, 6);
    }

    #[test]
    fn test_max_heading_clamped() {
        assert_eq!(RenderOptions::new().with_max_heading(0).max_heading_level, 1);
        assert_eq!(RenderOptions::new().with_max_heading(9).max_heading_level, 6);
        assert_eq!(RenderOptions::new().with_max_heading(3).max_heading_level, 3);
    }

    #[test]
    fn test_builder_chain() {
        let options = RenderOptions::new()
            .with_frontmatter(true)
            .with_preparation(false)
            .with_stats(true);
        assert!(options.include_frontmatter);
        assert!(!options.include_preparation);
        assert!(options.collect_stats);
    }
}
