//! UI error types
//!
//! Navigation anomalies (Up at the first row, Back at the root) are absorbed
//! as no-ops by design; only construction-time misuse surfaces as an error.

/// Errors from page construction and stack management
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiError {
    /// Dialog constructed with an empty item list
    EmptyItemList,
    /// Page stack is at its fixed depth limit
    StackFull,
}
