use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One axis of a target size: a concrete pixel count or unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Pixels(u32),
    Undefined,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}"),
            Self::Undefined => write!(f, "-1"),
        }
    }
}

/// Requested output size for an image. `Original` means the source's
/// native size, no resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Original,
    Bounded { width: Dimension, height: Dimension },
}

impl Size {
    pub fn bounded(width: Dimension, height: Dimension) -> Self {
        Self::Bounded { width, height }
    }

    pub fn pixels(width: u32, height: u32) -> Self {
        Self::Bounded {
            width: Dimension::Pixels(width),
            height: Dimension::Pixels(height),
        }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Bounded { width, height } => write!(f, "{width}x{height}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSizeError {
    MissingSeparator,
    InvalidDimension(String),
}

impl Display for ParseSizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => {
                write!(f, "size must be 'original' or '<width>x<height>'")
            }
            Self::InvalidDimension(text) => {
                write!(f, "dimension must be a pixel count or -1, got {text:?}")
            }
        }
    }
}

impl std::error::Error for ParseSizeError {}

fn parse_dimension(text: &str) -> Result<Dimension, ParseSizeError> {
    if text == "-1" {
        return Ok(Dimension::Undefined);
    }
    text.parse::<u32>()
        .map(Dimension::Pixels)
        .map_err(|_| ParseSizeError::InvalidDimension(text.to_string()))
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text == "original" {
            return Ok(Self::Original);
        }
        let Some((width, height)) = text.split_once('x') else {
            return Err(ParseSizeError::MissingSeparator);
        };
        Ok(Self::Bounded {
            width: parse_dimension(width)?,
            height: parse_dimension(height)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_renders_as_literal() {
        assert_eq!(Size::Original.to_string(), "original");
    }

    #[test]
    fn bounded_renders_width_x_height() {
        assert_eq!(Size::pixels(800, 600).to_string(), "800x600");
    }

    #[test]
    fn undefined_axis_renders_as_minus_one() {
        let size = Size::bounded(Dimension::Undefined, Dimension::Pixels(600));
        assert_eq!(size.to_string(), "-1x600");
    }

    #[test]
    fn rendered_sizes_parse_back() {
        for size in [
            Size::Original,
            Size::pixels(800, 600),
            Size::bounded(Dimension::Undefined, Dimension::Pixels(600)),
            Size::bounded(Dimension::Pixels(0), Dimension::Undefined),
        ] {
            assert_eq!(size.to_string().parse::<Size>(), Ok(size));
        }
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert_eq!(
            "800".parse::<Size>(),
            Err(ParseSizeError::MissingSeparator)
        );
    }

    #[test]
    fn parse_rejects_bad_dimensions() {
        assert!(matches!(
            "800x-2".parse::<Size>(),
            Err(ParseSizeError::InvalidDimension(text)) if text == "-2"
        ));
        assert!(matches!(
            "wxh".parse::<Size>(),
            Err(ParseSizeError::InvalidDimension(_))
        ));
    }

    #[test]
    fn size_serializes_for_request_payloads() {
        let json = serde_json::to_string(&Size::pixels(800, 600)).expect("serialize");
        assert_eq!(
            json,
            r#"{"Bounded":{"width":{"Pixels":800},"height":{"Pixels":600}}}"#
        );
        let back: Size = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Size::pixels(800, 600));
    }
}
