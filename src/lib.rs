mod key;
mod size;

pub use key::{cache_key, CacheKeyBuilder, ParseKeyError, ParsedKey, DEFAULT_PREFIX};
pub use size::{Dimension, ParseSizeError, Size};
