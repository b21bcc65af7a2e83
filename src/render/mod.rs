//! Render Module
//!
//! Presentation adapters over a finished [`RecommendationRecord`]. Nothing
//! in here feeds back into the engine.

mod html;
mod markdown;
mod view;

pub use html::{render_cards, render_form_page, render_html, render_page};
pub use markdown::render_markdown;
pub use view::ScoreBar;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engine::RecommendationRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Json,
    Markdown,
    Html,
}

impl RenderFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            RenderFormat::Json => "application/json",
            RenderFormat::Markdown => "text/markdown; charset=utf-8",
            RenderFormat::Html => "text/html; charset=utf-8",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RenderFormat::Json => "json",
            RenderFormat::Markdown => "markdown",
            RenderFormat::Html => "html",
        })
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(RenderFormat::Json),
            "markdown" | "md" => Ok(RenderFormat::Markdown),
            "html" => Ok(RenderFormat::Html),
            other => Err(format!("unsupported format '{other}' (expected json, markdown or html)")),
        }
    }
}

pub fn render(record: &RecommendationRecord, format: RenderFormat) -> serde_json::Result<String> {
    match format {
        RenderFormat::Json => serde_json::to_string_pretty(record),
        RenderFormat::Markdown => Ok(render_markdown(record)),
        RenderFormat::Html => Ok(render_html(record)),
    }
}
