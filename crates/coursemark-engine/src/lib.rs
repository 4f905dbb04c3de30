pub mod chat;
pub mod content;
pub mod diagram;
pub mod markdown;
pub mod text;

// Re-export key functions for easier usage
pub use chat::{Sender, StubAssistant, format_message, render_message};
pub use content::{
    ContentBlock, ContentType, Module, ModuleError, VideoPlatform, embed_url, render_block,
    render_module,
};
pub use diagram::{DiagramSource, sanitize_diagram_source};
pub use markdown::{render_markdown, render_markdown_opt};
pub use text::{TimeValue, escape_html, format_duration, format_time};
