//! Format-independent building blocks shared by the converters.

pub mod list_numbering;
pub mod style;
pub mod tags;

pub use list_numbering::ListTracker;
