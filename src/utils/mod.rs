// ============================================================================
// Utilities Module
// Helper functions for binaries and tests embedding the converter
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_tracing;
