//! Block constructs.
//!
//! Each construct owns its syntax: its delimiter constants, the `opens` check
//! used for paragraph interruption, and a speculative `read` that fails
//! without side effects on the reader when the text does not match.

pub mod block_quote;
pub mod code_block;
pub mod heading;
pub mod horizontal_line;
pub mod html;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::Blockquote;
pub use code_block::CodeBlock;
pub use heading::Heading;
pub use horizontal_line::HorizontalLine;
pub use html::Html;
pub use list::{List, ListItem, ListKind};
pub use paragraph::Paragraph;
pub use table::{Alignment, Table};
