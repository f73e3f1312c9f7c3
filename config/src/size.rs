use anyhow::{Context, Result};
use serde::{de, Deserialize, Deserializer};

/// Parses a size string like `"512"`, `"2K"` or `"1M"`.
///
/// `K` and `M` suffixes are binary multiples.
///
/// # Errors
///
/// If the number is malformed or the result doesn't fit into `u32`.
pub fn parse_size(input: &str) -> Result<u32> {
    let input = input.trim();
    let (digits, multiplier) = if let Some(digits) = input.strip_suffix('K') {
        (digits, 1 << 10)
    } else if let Some(digits) = input.strip_suffix('M') {
        (digits, 1 << 20)
    } else {
        (input, 1)
    };
    let value = digits.trim().parse::<u32>().with_context(|| format!("invalid size `{input}`"))?;
    value.checked_mul(multiplier).with_context(|| format!("size `{input}` is too large"))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Bytes(u32),
        Text(String),
    }
    match Size::deserialize(deserializer)? {
        Size::Bytes(value) => Ok(value),
        Size::Text(text) => parse_size(&text).map_err(de::Error::custom),
    }
}
