//! Page metadata parsing
//!
//! Pages carry their metadata either as YAML front-matter or as an MDX
//! `export const metadata = { ... }` block. Both end up in a [`FrontMatter`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    static ref METADATA_EXPORT: Regex =
        Regex::new(r"export\s+const\s+metadata\s*=\s*\{").unwrap();
    static ref METADATA_FIELD: Regex = Regex::new(
        r#"(?s)["']?\b(title|date|description)\b["']?\s*:\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)"|`((?:[^`\\]|\\.)*)`)"#
    )
    .unwrap();
}

/// Metadata of a single page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse metadata from a page's source
    /// Returns (front_matter, remaining_content)
    ///
    /// Fields missing from the YAML block are filled from an MDX metadata
    /// export found in the body.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.trim_start();

        let (mut fm, body) = if content.starts_with("---") {
            Self::parse_yaml(content)
        } else {
            (FrontMatter::default(), content)
        };

        if let Some(exported) = Self::parse_mdx_export(body) {
            fm.title = fm.title.or(exported.title);
            fm.date = fm.date.or(exported.date);
            fm.description = fm.description.or(exported.description);
        }

        (fm, body)
    }

    /// Broken or prose-like YAML falls back to defaults and the full content
    fn parse_yaml(content: &str) -> (Self, &str) {
        let rest = &content[3..]; // Skip opening ---
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..]; // Skip \n---
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        // A leading thematic break followed by prose is markdown, not YAML
        let has_yaml_structure = yaml_content.lines().any(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return false;
            }
            match trimmed.split_once(':') {
                Some((key, value)) => {
                    !key.is_empty()
                        && key
                            .chars()
                            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                        && (value.is_empty() || value.starts_with(' '))
                }
                None => false,
            }
        });

        if !has_yaml_structure {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }

    /// Extract string fields from `export const metadata = { ... }`
    ///
    /// Only quoted literal values of the top-level object are recognised.
    pub fn parse_mdx_export(content: &str) -> Option<Self> {
        let start = METADATA_EXPORT.find(content)?.end();
        let block = top_level_object(&content[start..])?;

        let mut fm = FrontMatter::default();
        for caps in METADATA_FIELD.captures_iter(&block) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| unescape(m.as_str()));

            match &caps[1] {
                "title" => fm.title = fm.title.or(value),
                "date" => fm.date = fm.date.or(value),
                "description" => fm.description = fm.description.or(value),
                _ => {}
            }
        }

        Some(fm)
    }
}

/// Text of an object literal whose opening brace was just consumed, with
/// nested objects left out. `None` if the object is never closed.
fn top_level_object(rest: &str) -> Option<String> {
    let mut out = String::new();
    let mut depth = 1usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in rest.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
        } else {
            match c {
                '\'' | '"' | '`' => quote = Some(c),
                '{' => {
                    depth += 1;
                    continue;
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(out);
                    }
                    continue;
                }
                _ => {}
            }
        }

        if depth == 1 {
            out.push(c);
        }
    }

    None
}

/// Resolve backslash escapes in a quoted JS string value
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
