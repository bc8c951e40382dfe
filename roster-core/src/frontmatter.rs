//! Frontmatter splitting for profile documents.

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Ways a profile document can fail to yield metadata and a body.
#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("missing frontmatter delimiter")]
    MissingDelimiter,

    #[error("unterminated frontmatter")]
    Unterminated,

    #[error("invalid metadata syntax: {0}")]
    InvalidMetadata(#[from] serde_yaml::Error),

    #[error("invalid metadata syntax: expected a mapping, found {0}")]
    NotAMapping(&'static str),
}

const OPENING_DELIMITER: &str = "---\n";

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    // The metadata group is optional so that `---\n---\n` is an empty block.
    FRONTMATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A---\n(?:(.*?)\n)?---\n(.*)\z").expect("valid frontmatter regex")
    })
}

/// Split a profile document into its metadata mapping and its body.
///
/// The document must open with a `---` line, and the metadata ends at the
/// first following `---` line. The body is trimmed and terminated by exactly
/// one newline.
///
/// # Example
///
/// ```
/// use roster_core::frontmatter::split_frontmatter;
///
/// let content = "---\nname: Aldric\nguild: Argent\n---\n\nHello **world**.\n\n";
///
/// let (metadata, body) = split_frontmatter(content).unwrap();
/// assert_eq!(metadata.get("name").and_then(|v| v.as_str()), Some("Aldric"));
/// assert_eq!(body, "Hello **world**.\n");
/// ```
pub fn split_frontmatter(content: &str) -> Result<(Mapping, String), FrontmatterError> {
    if !content.starts_with(OPENING_DELIMITER) {
        return Err(FrontmatterError::MissingDelimiter);
    }

    let captures = frontmatter_regex()
        .captures(content)
        .ok_or(FrontmatterError::Unterminated)?;
    let yaml = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let metadata = parse_metadata(yaml)?;

    let mut body = body.trim().to_string();
    body.push('\n');

    Ok((metadata, body))
}

fn parse_metadata(yaml: &str) -> Result<Mapping, FrontmatterError> {
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        Value::Bool(_) => Err(FrontmatterError::NotAMapping("a boolean")),
        Value::Number(_) => Err(FrontmatterError::NotAMapping("a number")),
        Value::String(_) => Err(FrontmatterError::NotAMapping("a string")),
        Value::Sequence(_) => Err(FrontmatterError::NotAMapping("a sequence")),
        Value::Tagged(_) => Err(FrontmatterError::NotAMapping("a tagged value")),
    }
}
