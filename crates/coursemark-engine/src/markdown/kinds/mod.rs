pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod html_block;
pub mod list;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use html_block::HtmlBlock;
pub use list::{ListKind, ListMarker};
pub use table::TableRow;
pub use thematic_break::ThematicBreak;
