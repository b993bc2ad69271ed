//! Graph adapters.

pub mod filtered;

#[doc(inline)]
pub use filtered::Filtered;
