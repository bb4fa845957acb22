use std::fmt::{Display, Formatter};

use crate::{ParseSizeError, Size};

pub const DEFAULT_PREFIX: &str = "img";

/// Derives cache keys of the form `<prefix>:<descriptor>:<size>` for an
/// external image cache.
///
/// The key is defined purely over the descriptor's `Display` output, so
/// two distinct descriptors that print the same text map to the same
/// key. That collision is accepted; callers choose a descriptor type
/// whose string form identifies the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeyBuilder {
    prefix: String,
}

impl Default for CacheKeyBuilder {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl CacheKeyBuilder {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `None` when the request has no source descriptor; such a
    /// request cannot be cached by identity.
    pub fn key<D>(&self, source: Option<&D>, size: Size) -> Option<String>
    where
        D: Display + ?Sized,
    {
        let source = source?;
        Some(format!("{}:{source}:{size}", self.prefix))
    }
}

/// Builds a key with the default `img` prefix.
pub fn cache_key<D>(source: Option<&D>, size: Size) -> Option<String>
where
    D: Display + ?Sized,
{
    CacheKeyBuilder::default().key(source, size)
}

/// A cache key split back into its segments, for inspection and
/// debugging of what an external cache is keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub prefix: String,
    pub source: String,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    MissingDelimiter,
    Size(ParseSizeError),
}

impl Display for ParseKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDelimiter => {
                write!(f, "cache key needs at least two ':' delimiters")
            }
            Self::Size(error) => write!(f, "invalid size segment: {error}"),
        }
    }
}

impl std::error::Error for ParseKeyError {}

impl From<ParseSizeError> for ParseKeyError {
    fn from(value: ParseSizeError) -> Self {
        Self::Size(value)
    }
}

impl ParsedKey {
    /// The size segment is taken from the last delimiter and the prefix
    /// from the first, so descriptor text may itself contain `:`.
    pub fn parse(key: &str) -> Result<Self, ParseKeyError> {
        let Some((rest, size_part)) = key.rsplit_once(':') else {
            return Err(ParseKeyError::MissingDelimiter);
        };
        let Some((prefix, source)) = rest.split_once(':') else {
            return Err(ParseKeyError::MissingDelimiter);
        };
        Ok(Self {
            prefix: prefix.to_string(),
            source: source.to_string(),
            size: size_part.parse()?,
        })
    }
}
