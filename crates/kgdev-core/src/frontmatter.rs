//! Frontmatter extraction for content files.
//!
//! Produces the raw record that [`crate::schema::validate`] consumes.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{CoreError, Result};

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
///
/// The closing delimiter must sit on a line of its own. A leading byte order
/// mark is ignored.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();
    let after_first = &content[delimiter.len()..];

    let fence = format!("\n{delimiter}");
    let closing_pos = after_first
        .match_indices(&fence)
        .map(|(pos, _)| pos)
        .find(|&pos| {
            let rest = &after_first[pos + fence.len()..];
            let line_end = rest.find('\n').unwrap_or(rest.len());
            rest[..line_end].trim().is_empty()
        })?;
    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + fence.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Parse the frontmatter of a content file into a raw record.
///
/// Files without frontmatter yield an empty mapping and the whole content
/// as body.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Value, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Ok((Value::Mapping(Mapping::new()), content.to_string()));
    };

    let raw: Value = match format {
        FrontmatterFormat::Yaml => {
            let mut raw: Value = serde_yaml::from_str(fm_str)
                .map_err(|e| CoreError::frontmatter(path, e.to_string()))?;
            // `<<: *anchor` stays a literal key until merged.
            raw.apply_merge()
                .map_err(|e| CoreError::frontmatter(path, e.to_string()))?;
            raw
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    // `---\n---` parses as null; treat it like a block with no keys.
    let raw = match raw {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    };

    Ok((raw, body.to_string()))
}
