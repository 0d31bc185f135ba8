// ============================================================================
// Logging
// Optional subscriber setup for binaries, demos and benches
// ============================================================================

use tracing::Level;

/// Install a formatting `tracing` subscriber at `level`.
///
/// The library only emits events; call this once from an application that
/// wants to see them. Returns `false` if a global subscriber was already set.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
