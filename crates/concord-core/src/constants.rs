/// Concord version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of positional slots in a compositional grounding
/// (theme, theme property, process, process property).
pub const COMPOSITIONAL_SLOTS: usize = 4;

/// Separator between ontology path segments in flat grounding ids.
pub const ONTOLOGY_PATH_SEPARATOR: char = '/';
