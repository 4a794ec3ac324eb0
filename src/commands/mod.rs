//! Command implementations for anansi

pub mod dispatch;
pub mod elements;
pub mod format;
pub mod get;
pub mod helpers;
pub mod leaves;
pub mod walk;
