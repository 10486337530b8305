//! Configuration types.

/// Parser configuration.
///
/// The defaults are the empirically tuned values the pipeline was
/// validated against; they are safe to leave alone.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum characters of body excerpt carried on output records.
    pub preview_max_chars: usize,
    /// Confidence at or above which a classified email is considered
    /// reliable enough for unattended import by the caller.
    pub auto_import_threshold: f32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            preview_max_chars: 300,
            auto_import_threshold: 0.5,
        }
    }
}
