//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = '`' `` - raw zone that suppresses other parsing
//! - **`Emphasis`**: `*`, `_`, `~` delimiter runs and their pairing rules
//! - **`Link`**: `[text](url "title")`, `[text][ref]` and `[text][]`
//! - **`Image`**: `!` followed by a link
//!
//! ## Design Principle
//!
//! Delimiter constants live here, not scattered in scanner code.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{DelimiterRun, Emphasis};
pub use image::Image;
pub use link::{Link, LinkTarget};
