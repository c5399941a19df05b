/*!
 * Core Module
 * Fundamental queue types, limits, error handling and synchronization
 */

pub mod errors;
pub mod limits;
pub mod sync;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use types::*;
