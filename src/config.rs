use crate::ast::MAX_EXPR_DEPTH;

/// Remaining stack below which deep third-party recursion (the `syn` parse
/// of emitted code, JSON decoding) moves to a freshly allocated segment
pub const STACK_RED_ZONE_BYTES: usize = 16 * 1024 * 1024;

/// Size of the segment allocated when the red zone is reached
pub const STACK_SEGMENT_BYTES: usize = 64 * 1024 * 1024;

/// Deepest JSON nesting a program document can need
///
/// Array of statements, statement wrapper, statement body, then two levels
/// (variant wrapper and node body) per expression level.
pub const MAX_JSON_DEPTH: usize = 3 + 2 * MAX_EXPR_DEPTH;

/// Policies shared by the passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Accept a `define` of a name that is already in scope
    pub allow_redeclaration: bool,
    /// Accept the same name twice in one assignment's target list
    pub allow_duplicate_targets: bool,
    /// Wrap emitted Rust statements in `fn main() { ... }`
    pub emit_main: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_redeclaration: false,
            allow_duplicate_targets: false,
            emit_main: true,
        }
    }
}

impl Config {
    /// Only undefined-variable findings are reported
    pub fn lenient() -> Self {
        Self {
            allow_redeclaration: true,
            allow_duplicate_targets: true,
            ..Self::default()
        }
    }
}
