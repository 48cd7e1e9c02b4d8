//! Constants for wiki-page-index
//!
//! File names, sentinel markers, and format strings shared across the
//! codebase.

// === File and Directory Names ===

/// Filename of the wiki landing page
pub const HOME_FILENAME: &str = "Home.md";

/// Suffix appended to the backup copy of the previous Home document
pub const BACKUP_SUFFIX: &str = ".old";

/// File extension for wiki pages
pub const MARKDOWN_EXTENSION: &str = ".md";

// === Sentinel Markers ===

/// Start of the generated region inside the Home document
pub const START_MARKER: &str = "<!--start Page Index-->";

/// End of the generated region inside the Home document
pub const END_MARKER: &str = "<!--end Page Index-->";

// === Markdown Rendering ===

/// Heading level of top-level tag sections
pub const TAG_HEADING_BASE_LEVEL: usize = 2;

// === Page Content ===

/// Prefix of a tag declaration line inside a page
pub const TAG_LINE_PREFIX: &str = "Tags: ";

/// Front matter fence line
pub const FRONT_MATTER_FENCE: &str = "---";

// === Validation Limits ===

/// Maximum size of front matter to parse (prevents DoS on malformed files)
pub const MAX_FRONT_MATTER_SIZE: usize = 64 * 1024; // 64KB

// === Title Derivation ===

/// Words rendered fully uppercase by the filename-to-title transform
pub const TITLE_ACRONYMS: &[&str] = &[
    "api", "cli", "faq", "html", "http", "https", "id", "io", "json", "sql",
    "ui", "url", "uuid", "yaml",
];
