//! Cloudinary delivery URL for the t-shirt preview.
//!
//! The URL is a chain of transformation segments applied to the base garment
//! image: pad the canvas, optionally recolor the shirt, then stack the number
//! and name text overlays. Fetching and decoding the image is left to the GUI
//! toolkit.

use std::fmt;

use tracing::debug;

use crate::color::{ShirtColor, TextColor};
use crate::constants::*;
use crate::form::validate;

/// Which Cloudinary account and base image the preview is built against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub host: String,
    pub cloud_name: String,
    pub base_image: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            host: CLOUDINARY_HOST.to_string(),
            cloud_name: CLOUDINARY_CLOUD_NAME.to_string(),
            base_image: BASE_TSHIRT_IMAGE.to_string(),
        }
    }
}

/// Bounding box a text overlay is fitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitBox {
    pub width: u32,
    pub height: u32,
}

/// One `/`-separated path segment of the delivery URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation<'a> {
    Canvas {
        width: u32,
        height: u32,
        background: &'static str,
    },
    Recolor {
        prompt: &'static str,
        to: ShirtColor,
    },
    TextOverlay {
        style: &'static str,
        text: &'a str,
        color: TextColor,
        fit: Option<FitBox>,
    },
    LayerApply {
        gravity: &'static str,
        y: i32,
    },
}

impl fmt::Display for Transformation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Canvas { width, height, background } => {
                write!(f, "w_{width},h_{height},c_pad,b_{background}")
            }
            Transformation::Recolor { prompt, to } => {
                write!(f, "e_gen_recolor:prompt_{prompt};to-color_{to}")
            }
            Transformation::TextOverlay { style, text, color, fit: None } => {
                write!(f, "l_text:{style}:{text},co_{color}")
            }
            Transformation::TextOverlay { style, text, color, fit: Some(fit) } => {
                write!(
                    f,
                    "c_fit,h_{},l_text:{style}:{text},w_{},co_{color}",
                    fit.height, fit.width
                )
            }
            Transformation::LayerApply { gravity, y } => {
                write!(f, "fl_layer_apply,g_{gravity},y_{y}")
            }
        }
    }
}

/// Transformation chain for a name/number/color combination, in URL order.
pub fn transformations<'a>(name: &'a str, number: &'a str, color: ShirtColor) -> Vec<Transformation<'a>> {
    let text_color = color.text_color();
    let mut chain = vec![Transformation::Canvas {
        width: 500,
        height: 500,
        background: "white",
    }];

    if !color.is_default() {
        chain.push(Transformation::Recolor {
            prompt: "shirt",
            to: color,
        });
    }

    chain.extend([
        Transformation::TextOverlay {
            style: "Arial_60_bold",
            text: number,
            color: text_color,
            fit: None,
        },
        Transformation::LayerApply {
            gravity: "north",
            y: 140,
        },
        Transformation::TextOverlay {
            style: "Arial_40_bold_center",
            text: name,
            color: text_color,
            fit: Some(FitBox {
                width: 180,
                height: 220,
            }),
        },
        Transformation::LayerApply {
            gravity: "north",
            y: 200,
        },
    ]);

    chain
}

/// Builds the preview URL, or an empty string when either field fails
/// validation. Name and number are embedded verbatim.
pub fn build_preview_url(config: &PreviewConfig, name: &str, number: &str, color: ShirtColor) -> String {
    if !validate(name, number).is_empty() {
        return String::new();
    }

    let path = transformations(name, number, color)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/");

    let url = format!(
        "{}/{}/image/upload/{}/{}",
        config.host, config.cloud_name, path, config.base_image
    );
    debug!(%url, "built preview url");
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_color_url() {
        let url = build_preview_url(&PreviewConfig::default(), "John", "10", ShirtColor::Blue);
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/w_500,h_500,c_pad,b_white\
             /l_text:Arial_60_bold:10,co_black/fl_layer_apply,g_north,y_140\
             /c_fit,h_220,l_text:Arial_40_bold_center:John,w_180,co_black/fl_layer_apply,g_north,y_200\
             /shirt-06"
        );
    }

    #[test]
    fn recolor_on_dark_shirt() {
        let url = build_preview_url(&PreviewConfig::default(), "Zoe", "99", ShirtColor::Maroon);
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/w_500,h_500,c_pad,b_white\
             /e_gen_recolor:prompt_shirt;to-color_maroon\
             /l_text:Arial_60_bold:99,co_white/fl_layer_apply,g_north,y_140\
             /c_fit,h_220,l_text:Arial_40_bold_center:Zoe,w_180,co_white/fl_layer_apply,g_north,y_200\
             /shirt-06"
        );
    }

    #[test]
    fn config_selects_account_and_base_image() {
        let config = PreviewConfig {
            host: "https://images.test".to_string(),
            cloud_name: "acme".to_string(),
            base_image: "tee-01".to_string(),
        };
        let url = build_preview_url(&config, "A", "1", ShirtColor::Blue);
        assert!(url.starts_with("https://images.test/acme/image/upload/"));
        assert!(url.ends_with("/tee-01"));
    }

    #[test]
    fn untrimmed_values_are_kept() {
        let url = build_preview_url(&PreviewConfig::default(), " Al ", "7 ", ShirtColor::Blue);
        assert!(url.contains("Arial_60_bold:7 ,co_black"));
        assert!(url.contains("Arial_40_bold_center: Al ,w_180"));
    }

    #[test]
    fn blank_fields_yield_empty_url() {
        let config = PreviewConfig::default();
        assert_eq!(build_preview_url(&config, "", "10", ShirtColor::Blue), "");
        assert_eq!(build_preview_url(&config, "John", "  ", ShirtColor::Red), "");
    }

    #[test]
    fn layer_apply_segment() {
        let segment = Transformation::LayerApply { gravity: "north", y: 140 };
        assert_eq!(segment.to_string(), "fl_layer_apply,g_north,y_140");
    }

    #[test]
    fn chain_omits_recolor_for_blue() {
        let chain = transformations("John", "10", ShirtColor::Blue);
        assert!(!chain.iter().any(|t| matches!(t, Transformation::Recolor { .. })));
        assert_eq!(chain.len(), 5);
    }
}
