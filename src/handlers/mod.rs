//! Handler implementations
//!
//! Output adapters built on the [`Handler`] trait. None of them is required by
//! the core; a logger with no handler simply discards its entries.

pub mod json;
pub mod memory;
#[cfg(feature = "console")]
pub mod text;

pub use json::JsonHandler;
pub use memory::MemoryHandler;
#[cfg(feature = "console")]
pub use text::{ColorMode, TextHandler};

pub use crate::core::{Handler, HandlerFn};
