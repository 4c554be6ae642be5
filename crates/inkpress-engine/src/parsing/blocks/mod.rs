//! # Block Parsing
//!
//! Blocks are read in a single forward pass over a [`Reader`].
//!
//! ## Parsing Phases
//!
//! 1. **Dispatch** (`classify`): the current and next character pick a
//!    candidate [`BlockKind`]. A line made only of `-`/`*` markers is always
//!    a horizontal line.
//! 2. **Speculative read** (`types`, `kinds`): the candidate reads itself
//!    inside [`Reader::attempt`]; on failure the reader is rewound and the
//!    text is read as a paragraph instead.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `ParsedBlock`
//! - **`kinds`**: one type per construct, owning its delimiters
//! - **`classify`**: the dispatch table and paragraph interruption rules
//! - **`builder`**: `BlockBuilder`, the loop that also handles front matter
//!   and URL declarations
//!
//! ## Key Invariants
//!
//! - Every failed read leaves the reader where it started
//! - Every loop iteration consumes at least one character
//! - Code blocks are raw zones: no block or inline parsing inside
//!
//! [`Reader`]: crate::parsing::reader::Reader
//! [`Reader::attempt`]: crate::parsing::reader::Reader::attempt

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::BlockKind;
pub use types::{Block, ParsedBlock};
