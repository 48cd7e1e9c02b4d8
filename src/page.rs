//! Wiki page discovery
//!
//! Scans a wiki checkout for indexable pages and derives each page's
//! display title, link target, and tags.

use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants as C;
use crate::frontmatter;
use crate::tags;

/// Files never indexed: dotfiles, the special wiki pages, and the Home
/// document itself
static FILE_EXCLUSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.|^_Sidebar\.md$|^_Footer\.md$|^Home\.md$").unwrap());

/// A single wiki page discovered in the checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WikiPage {
    /// Display title (front matter `title:` or derived from the filename)
    pub title: String,
    /// Link target, the filename with extension
    pub filename: String,
    /// Tags declared by the page, in declaration order
    pub tags: Vec<String>,
}

impl WikiPage {
    /// Build a page from its filename and raw content
    ///
    /// Front matter wins over the filename transform for the title; front
    /// matter tags come before tag-line tags, duplicates dropped.
    pub fn from_content(filename: &str, content: &str) -> Self {
        let (front, body) = frontmatter::extract(content);
        let title = front
            .as_ref()
            .and_then(|f| f.title.clone())
            .unwrap_or_else(|| title_from_filename(filename));

        let mut page_tags = front.map(|f| f.tags.unwrap_or_default()).unwrap_or_default();
        for tag in tags::scan_tag_line(body) {
            if !page_tags.contains(&tag) {
                page_tags.push(tag);
            }
        }

        WikiPage {
            title,
            filename: filename.to_string(),
            tags: page_tags,
        }
    }
}

/// Whether a directory entry name is an indexable wiki page
pub fn is_page_file(name: &str) -> bool {
    name.ends_with(C::MARKDOWN_EXTENSION) && !FILE_EXCLUSION_RE.is_match(name)
}

/// Discover all indexable pages in a wiki checkout
///
/// Page content is read with lossy UTF-8 so a page with a broken encoding
/// still gets indexed.
pub fn scan_pages(dir: &Path) -> io::Result<Vec<WikiPage>> {
    let mut pages = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !is_page_file(&name) {
            continue;
        }
        let raw = fs::read(entry.path())?;
        pages.push(WikiPage::from_content(&name, &String::from_utf8_lossy(&raw)));
    }

    Ok(pages)
}

/// Derive a display title from a page filename
///
/// Strips the extension and splits on dashes and underscores. Words in the
/// acronym table are uppercased entirely, every other word gets its first
/// letter uppercased: `api-reference.md` becomes `API Reference`.
pub fn title_from_filename(filename: &str) -> String {
    let stem = filename
        .strip_suffix(C::MARKDOWN_EXTENSION)
        .unwrap_or(filename);

    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(title_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_word(word: &str) -> String {
    if C::TITLE_ACRONYMS.contains(&word.to_lowercase().as_str()) {
        return word.to_uppercase();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
