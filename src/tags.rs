//! Page tag scanning and grouping
//!
//! A page declares tags on a paragraph line like:
//! `Tags: Build Tooling-CI`
//!
//! A dash nests tags (Tooling-CI puts the page under Tooling, then CI), an
//! underscore displays as a space in headings. Only genuine paragraph text
//! counts: a `Tags:` line inside a fenced code block is ignored.

use std::collections::BTreeMap;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::constants as C;

/// Scan page content for its tag declaration line
///
/// The first paragraph line carrying tags wins; a bare `Tags:` with no
/// tokens is skipped.
pub fn scan_tag_line(content: &str) -> Vec<String> {
    let mut in_paragraph = false;
    let mut text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                text.clear();
            }
            Event::Text(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push('\n'),
            Event::End(TagEnd::Paragraph) => {
                in_paragraph = false;
                for line in text.lines() {
                    if let Some(rest) = line.strip_prefix(C::TAG_LINE_PREFIX) {
                        let tags: Vec<String> =
                            rest.split_whitespace().map(str::to_string).collect();
                        if !tags.is_empty() {
                            return tags;
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Vec::new()
}

/// Nested grouping of pages by tag
///
/// Page indices refer into an already-ordered page list, so every bucket
/// inherits the index ordering.
#[derive(Debug, Default)]
pub struct TagTree {
    /// Pages tagged exactly at this level (top level: pages with no tags)
    pub pages: Vec<usize>,
    /// Child tags by segment name
    pub children: BTreeMap<String, TagTree>,
}

impl TagTree {
    /// Group the given pages by their tags
    ///
    /// A page with several tags lands under each of them; a page with none
    /// lands at the root.
    pub fn build<'a, I>(tag_lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut root = TagTree::default();
        for (idx, tags) in tag_lists.into_iter().enumerate() {
            if tags.is_empty() {
                root.pages.push(idx);
            } else {
                for tag in tags {
                    root.insert(idx, tag);
                }
            }
        }
        root
    }

    /// Record a page under a dash-nested tag path
    fn insert(&mut self, page_idx: usize, tag_path: &str) {
        let mut node = self;
        for segment in tag_path.split('-').filter(|s| !s.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
        node.pages.push(page_idx);
    }

    /// Child tag names sorted case-insensitively
    pub fn sorted_children(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.children.keys().map(String::as_str).collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }
}

/// Display form of a tag segment: underscores become spaces
pub fn display_tag(segment: &str) -> String {
    segment.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_tag_line_simple() {
        let tags = scan_tag_line("Intro paragraph.\n\nTags: Rust Tooling\n");
        assert_eq!(tags, vec!["Rust", "Tooling"]);
    }

    #[test]
    fn test_scan_tag_line_nested_token() {
        let tags = scan_tag_line("Tags: Build-CI\n");
        assert_eq!(tags, vec!["Build-CI"]);
    }

    #[test]
    fn test_scan_tag_line_none() {
        assert!(scan_tag_line("Just prose.\n").is_empty());
        assert!(scan_tag_line("").is_empty());
    }

    #[test]
    fn test_scan_tag_line_first_wins() {
        let tags = scan_tag_line("Tags: First\n\nTags: Second\n");
        assert_eq!(tags, vec!["First"]);
    }

    #[test]
    fn test_scan_tag_line_empty_declaration_skipped() {
        let tags = scan_tag_line("Tags: \n\nTags: Real\n");
        assert_eq!(tags, vec!["Real"]);
    }

    #[test]
    fn test_scan_tag_line_ignores_code_blocks() {
        let content = "```\nTags: NotATag\n```\n\nTags: Real\n";
        assert_eq!(scan_tag_line(content), vec!["Real"]);

        let only_code = "```\nTags: NotATag\n```\n";
        assert!(scan_tag_line(only_code).is_empty());
    }

    #[test]
    fn test_scan_tag_line_mid_paragraph() {
        // The original scanned every line, so a tag line that is not the
        // first line of its paragraph still counts
        let content = "First line\nTags: Found\n";
        assert_eq!(scan_tag_line(content), vec!["Found"]);
    }

    #[test]
    fn test_tag_tree_build() {
        let lists: Vec<Vec<String>> = vec![
            vec![],
            vec!["Build".to_string()],
            vec!["Build-CI".to_string(), "Docs".to_string()],
        ];
        let tree = TagTree::build(lists.iter().map(Vec::as_slice));

        assert_eq!(tree.pages, vec![0]);
        let build = &tree.children["Build"];
        assert_eq!(build.pages, vec![1]);
        assert_eq!(build.children["CI"].pages, vec![2]);
        assert_eq!(tree.children["Docs"].pages, vec![2]);
    }

    #[test]
    fn test_sorted_children_case_insensitive() {
        let lists: Vec<Vec<String>> = vec![
            vec!["beta".to_string()],
            vec!["Alpha".to_string()],
            vec!["ZZZ".to_string()],
        ];
        let tree = TagTree::build(lists.iter().map(Vec::as_slice));
        assert_eq!(tree.sorted_children(), vec!["Alpha", "beta", "ZZZ"]);
    }

    #[test]
    fn test_display_tag() {
        assert_eq!(display_tag("Release_Notes"), "Release Notes");
        assert_eq!(display_tag("Plain"), "Plain");
    }
}
