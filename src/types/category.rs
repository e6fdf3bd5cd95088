//! Leaderboard categories.
//!
//! The category set is closed and compiled in. [`Category::All`] is the
//! "no filter" sentinel and the default for every operation that takes an
//! optional category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RouterError;

/// A leaderboard category key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Overall rankings across every category.
    #[default]
    #[serde(rename = "allcategories")]
    All,
    #[serde(rename = "website")]
    Website,
    #[serde(rename = "gamedev")]
    GameDev,
    #[serde(rename = "3d")]
    ThreeD,
    #[serde(rename = "dataviz")]
    DataViz,
    #[serde(rename = "uicomponent")]
    UiComponent,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "logo")]
    Logo,
    #[serde(rename = "svg")]
    Svg,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "imagetoimage")]
    ImageToImage,
    #[serde(rename = "slides")]
    Slides,
    #[serde(rename = "graphicdesign")]
    GraphicDesign,
    #[serde(rename = "tts")]
    TextToSpeech,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 14] = [
        Category::All,
        Category::Website,
        Category::GameDev,
        Category::ThreeD,
        Category::DataViz,
        Category::UiComponent,
        Category::Image,
        Category::Logo,
        Category::Svg,
        Category::Video,
        Category::ImageToImage,
        Category::Slides,
        Category::GraphicDesign,
        Category::TextToSpeech,
    ];

    /// Wire key sent to the leaderboard origin.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "allcategories",
            Category::Website => "website",
            Category::GameDev => "gamedev",
            Category::ThreeD => "3d",
            Category::DataViz => "dataviz",
            Category::UiComponent => "uicomponent",
            Category::Image => "image",
            Category::Logo => "logo",
            Category::Svg => "svg",
            Category::Video => "video",
            Category::ImageToImage => "imagetoimage",
            Category::Slides => "slides",
            Category::GraphicDesign => "graphicdesign",
            Category::TextToSpeech => "tts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::All => "All Categories",
            Category::Website => "Website",
            Category::GameDev => "Game Dev",
            Category::ThreeD => "3D Design",
            Category::DataViz => "Data Viz",
            Category::UiComponent => "UI Component",
            Category::Image => "Image",
            Category::Logo => "Logo",
            Category::Svg => "SVG",
            Category::Video => "Video",
            Category::ImageToImage => "Image to Image",
            Category::Slides => "Slides",
            Category::GraphicDesign => "Graphic Design",
            Category::TextToSpeech => "Text-to-Speech",
        }
    }

    /// What models are asked to produce in this category.
    pub fn description(&self) -> &'static str {
        match self {
            Category::All => "Overall rankings across all design benchmark categories.",
            Category::Website => {
                "Models generate a complete website from a text prompt. Output: single-file HTML \
                 with inline CSS and JavaScript. May use Tailwind CSS, Three.js, D3, or Recharts. \
                 Tests responsive layout, modern UI patterns, visual polish, and code quality."
            }
            Category::GameDev => {
                "Models generate a playable browser game from a text prompt. Output: single HTML \
                 file with inline CSS and JavaScript. Must include game mechanics, scoring system, \
                 and game states (start, play, game over). May use Canvas API, WebGL, or Three.js. \
                 Tests playability, fun factor, and code structure."
            }
            Category::ThreeD => {
                "Models generate an interactive 3D scene from a text prompt. Output: single HTML \
                 file using WebGL, Three.js, Babylon.js, or CSS 3D transforms with inline \
                 JavaScript. Must include proper lighting, materials, camera controls, and smooth \
                 animation. Tests visual fidelity and interactivity."
            }
            Category::DataViz => {
                "Models generate interactive data visualizations from a text prompt. Output: \
                 single HTML file using D3.js, Chart.js, Recharts, Canvas API, or inline SVG with \
                 JavaScript. Must include interactive charts with hover states, tooltips, and \
                 responsive scaling. Tests data clarity and presentation."
            }
            Category::UiComponent => {
                "Models generate a production-ready UI component from a text prompt. Output: \
                 single HTML file with inline CSS and JavaScript. Must demonstrate all interaction \
                 states: default, hover, active, focus, loading, disabled, and error. Tests visual \
                 design, accessibility, and micro-interactions."
            }
            Category::Image => {
                "Models generate an image from a text prompt. Output: image file (PNG/JPEG). This \
                 is a non-code visual generation task. Tests visual quality, prompt adherence, \
                 artistic coherence, and detail."
            }
            Category::Logo => {
                "Models generate a logo design from a text prompt. Output: image file or SVG. \
                 Tests brand identity, simplicity, scalability, memorability, and visual balance."
            }
            Category::Svg => {
                "Models generate SVG markup from a text prompt. Output: SVG code (XML-based vector \
                 graphics). Tests path quality, visual clarity, code cleanliness, and scalability."
            }
            Category::Video => {
                "Models generate a video from a text prompt. Output: video file (MP4/WebM). This \
                 is a non-code visual generation task. Tests motion quality, temporal coherence, \
                 visual composition, and prompt adherence."
            }
            Category::ImageToImage => {
                "Models transform an existing image based on a text prompt. Input: image + text. \
                 Output: modified image file. Tests edit accuracy, style transfer quality, and \
                 detail preservation."
            }
            Category::Slides => {
                "Models generate a presentation from a text prompt. Output: PDF or PowerPoint \
                 file. Tests information hierarchy, visual consistency, slide layout, and \
                 typography."
            }
            Category::GraphicDesign => {
                "Models generate graphic design assets (posters, banners, marketing materials) \
                 from a text prompt. Output: image file. Tests typography, composition, color \
                 theory, and visual impact."
            }
            Category::TextToSpeech => {
                "Models generate speech audio from text input. Output: audio file (MP3/WAV). \
                 Tests naturalness, prosody, clarity, emotional expression, and voice quality."
            }
        }
    }

    /// One-line summary of the accepted keys, for argument help text.
    ///
    /// Each specific category is annotated with the first sentence of its
    /// description, lower-cased.
    pub fn options_help(prefix: &str) -> String {
        let entries: Vec<String> = Self::ALL
            .iter()
            .map(|c| match c {
                Category::All => c.as_str().to_string(),
                _ => {
                    let first = c.description().split(". ").next().unwrap_or_default();
                    format!("{} ({})", c.as_str(), first.to_lowercase())
                }
            })
            .collect();
        format!(
            "{prefix}. Options: {}. Defaults to \"allcategories\".",
            entries.join(", ")
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                RouterError::InvalidInput(format!(
                    "unknown category \"{s}\" (expected one of: {})",
                    valid.join(", ")
                ))
            })
    }
}
