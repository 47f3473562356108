#![deny(clippy::all)]
//! Terminal hex viewer that keeps only the visible window of a file in memory.
//!
//! The [`Viewport`] owns the file and a line-aligned window offset; every
//! [`Navigation`] re-seeks the file and reads at most one page, and the
//! [`hex_view`] module turns that page into `offset: hex  ascii` rows.

pub mod byte_source;
pub mod config;
pub mod error;
pub mod hex_view;
pub mod keymap;
pub mod logging;
pub mod modes;
pub mod navigation;
pub mod viewport;

pub use byte_source::ByteSource;
pub use error::{NavigationError, ViewerError};
pub use modes::Command;
pub use navigation::Navigation;
pub use viewport::{Page, Viewport, ViewportGeometry, LINE_WIDTH};
