//! Typed content blocks that make up a course module, and their static HTML
//! rendering.

pub mod module;
pub mod render;
pub mod video;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use module::{Module, ModuleError};
pub use render::{render_block, render_module};
pub use video::{VideoPlatform, embed_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Video,
    Code,
    Quiz,
    Mermaid,
}

impl ContentType {
    /// Label shown above a block in both the editor and the student view.
    pub fn label(self) -> &'static str {
        match self {
            ContentType::Text => "📝 Theory",
            ContentType::Video => "🎥 Video",
            ContentType::Code => "💻 Practice",
            ContentType::Quiz => "🧠 Knowledge check",
            ContentType::Mermaid => "📊 Diagram",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Video => "video",
            ContentType::Code => "code",
            ContentType::Quiz => "quiz",
            ContentType::Mermaid => "mermaid",
        }
    }
}

/// One unit of course material, tagged by `content_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text(TextBlock),
    Video(VideoBlock),
    Code(CodeBlock),
    Quiz(QuizBlock),
    Mermaid(DiagramBlock),
}

impl ContentBlock {
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentBlock::Text(_) => ContentType::Text,
            ContentBlock::Video(_) => ContentType::Video,
            ContentBlock::Code(_) => ContentType::Code,
            ContentBlock::Quiz(_) => ContentType::Quiz,
            ContentBlock::Mermaid(_) => ContentType::Mermaid,
        }
    }

    pub fn is_ai_generated(&self) -> bool {
        match self {
            ContentBlock::Text(b) => b.ai_generated,
            ContentBlock::Video(b) => b.ai_generated,
            ContentBlock::Code(b) => b.ai_generated,
            ContentBlock::Quiz(b) => b.ai_generated,
            ContentBlock::Mermaid(b) => b.ai_generated,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub md_content: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoBlock {
    #[serde(default)]
    pub platform: VideoPlatform,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    /// Timestamp label (seconds or `M:SS`) to description.
    #[serde(default)]
    pub key_moments: BTreeMap<String, String>,
    #[serde(default)]
    pub discussion_questions: Vec<String>,
    #[serde(default)]
    pub ai_generated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizBlock {
    /// `(question, answer)` pairs.
    #[serde(default)]
    pub questions: Vec<(String, String)>,
    #[serde(default)]
    pub ai_generated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramBlock {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub mermaid_code: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}
