//! The page index
//!
//! Ordered sequence of wiki pages plus the markdown rendering of the
//! generated region. Fully rebuilt on every run.

use crate::constants as C;
use crate::page::WikiPage;
use crate::tags::{self, TagTree};

/// Ordered index of all indexable pages in a wiki checkout
#[derive(Debug)]
pub struct PageIndex {
    pages: Vec<WikiPage>,
}

impl PageIndex {
    /// Order pages case-insensitively by title, ties broken by filename
    pub fn new(mut pages: Vec<WikiPage>) -> Self {
        pages.sort_by(|a, b| {
            (a.title.to_lowercase(), &a.filename).cmp(&(b.title.to_lowercase(), &b.filename))
        });
        PageIndex { pages }
    }

    pub fn pages(&self) -> &[WikiPage] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Render as one flat markdown list, one link line per page
    pub fn render_flat(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            push_entry(&mut out, page);
        }
        out
    }

    /// Render grouped by tags: untagged pages first, then one section per
    /// tag, nested sections one heading level deeper
    pub fn render_tagged(&self) -> String {
        let tree = TagTree::build(self.pages.iter().map(|p| p.tags.as_slice()));
        let mut out = String::new();
        render_tree(&tree, &self.pages, C::TAG_HEADING_BASE_LEVEL, &mut out);
        out
    }
}

fn push_entry(out: &mut String, page: &WikiPage) {
    out.push_str(&format!("- [{}]({})\n", page.title, page.filename));
}

fn render_tree(node: &TagTree, pages: &[WikiPage], level: usize, out: &mut String) {
    for &idx in &node.pages {
        push_entry(out, &pages[idx]);
    }
    for name in node.sorted_children() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{} {}\n\n", "#".repeat(level), tags::display_tag(name)));
        render_tree(&node.children[name], pages, level + 1, out);
    }
}
