/**
 * Error Types
 *
 * Board-level error definitions and their HTTP conversions.
 */

pub mod conversion;
pub mod types;

pub use types::BoardError;
