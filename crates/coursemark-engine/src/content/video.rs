use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RUTUBE_VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/video/([a-f0-9]+)/").expect("valid rutube id regex"));

const RUTUBE_EMBED_BASE: &str = "https://rutube.ru/play/embed/";

/// Hosting platform of a video block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VideoPlatform {
    #[default]
    YouTube,
    RuTube,
    Other(String),
}

impl From<String> for VideoPlatform {
    fn from(name: String) -> Self {
        match name.as_str() {
            "YouTube" => VideoPlatform::YouTube,
            "RuTube" => VideoPlatform::RuTube,
            _ => VideoPlatform::Other(name),
        }
    }
}

impl From<VideoPlatform> for String {
    fn from(platform: VideoPlatform) -> Self {
        platform.to_string()
    }
}

impl fmt::Display for VideoPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoPlatform::YouTube => f.write_str("YouTube"),
            VideoPlatform::RuTube => f.write_str("RuTube"),
            VideoPlatform::Other(name) => f.write_str(name),
        }
    }
}

/// URL to put in the player iframe. RuTube watch pages are turned into their
/// embed form; every other URL is used as given.
pub fn embed_url(url: &str, platform: &VideoPlatform) -> String {
    if *platform == VideoPlatform::RuTube
        && let Some(caps) = RUTUBE_VIDEO_ID.captures(url)
    {
        return format!("{RUTUBE_EMBED_BASE}{}", &caps[1]);
    }
    url.to_string()
}
