//! Utilities for snapshot testing with insta

use insta::{assert_snapshot, Settings};

/// Configure insta settings for consistent snapshots
pub fn with_settings<F>(f: F)
where
    F: FnOnce(),
{
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path("../snapshots");
    settings.set_prepend_module_to_snapshot(false);
    settings.bind(f);
}

/// Snapshot of a program next to the Rust emitted for it
pub fn assert_transpiler_snapshot(name: &str, calc_program: &str, rust_output: &str) {
    with_settings(|| {
        assert_snapshot!(
            name,
            format!(
                "=== INPUT (calc) ===\n{}\n\n=== OUTPUT (Rust) ===\n{}",
                calc_program.trim_end(),
                rust_output.trim_end()
            )
        );
    });
}

/// Snapshot of an error rendered with its Display impl
pub fn assert_error_snapshot(name: &str, error: &dyn std::fmt::Display) {
    with_settings(|| {
        assert_snapshot!(name, error.to_string().trim_end());
    });
}
