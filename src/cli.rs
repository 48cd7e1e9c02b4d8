use std::path::PathBuf;

use clap::Parser;

/// wiki-page-index - Regenerates the page index on a GitHub wiki's Home page
///
/// # Quick Reference
///
/// ```bash
/// wiki-page-index --insert           # Update Home.md in the current checkout
/// wiki-page-index ~/wiki --insert    # Update a specific checkout
/// wiki-page-index ~/wiki             # Bootstrap a brand-new Home.md
/// wiki-page-index --tags --insert    # Group pages under their tag headings
/// wiki-page-index --dry-run          # Print the section without writing
/// wiki-page-index --dry-run --json   # Page inventory as JSON for scripting
/// ```
///
/// ## Sentinel Markers
///
/// The generated region of Home.md is delimited by a marker pair:
///
/// ```markdown
/// <!--start Page Index-->
/// - [API Reference](api-reference.md)
/// - [Getting Started](Getting-Started.md)
/// <!--end Page Index-->
/// ```
///
/// With `--insert`, hand-written content outside the markers is preserved
/// byte for byte; if the markers are missing, a fresh section is appended
/// at the end of the file. Without `--insert`, the section becomes the
/// whole file. The previous Home.md is kept as Home.md.old before every
/// write.
///
/// ## Titles
///
/// Page titles come from the filename: dashes and underscores become
/// spaces and each word is capitalized (`api-reference.md` lists as
/// "API Reference"). A page may override this with YAML front matter:
///
/// ```markdown
/// ---
/// title: Custom Title
/// ---
/// ```
///
/// ## Tags
///
/// Pages declare tags in front matter (`tags: [Build]`) or on a paragraph
/// line `Tags: Build Tooling-CI`. A dash nests tags, an underscore
/// displays as a space. `_Sidebar.md`, `_Footer.md`, dotfiles, and
/// Home.md itself are never indexed.
#[derive(Parser, Debug)]
#[command(name = "wiki-page-index")]
#[command(version = "0.1.0")]
#[command(about = "Regenerates the page index on a GitHub wiki's Home page")]
pub struct Cli {
    /// Path to the wiki checkout (defaults to the current directory)
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Merge the index into the existing Home document between the
    /// sentinel markers instead of replacing the whole file
    #[arg(short, long)]
    pub insert: bool,

    /// Group pages under their tag headings instead of one flat list
    #[arg(short, long)]
    pub tags: bool,

    /// Print the rendered section to stdout without writing any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output the discovered pages as JSON (for scripting/LLM usage)
    #[arg(short = 'j', long, requires = "dry_run")]
    pub json: bool,
}
