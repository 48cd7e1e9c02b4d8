//! Top-level generator pipeline
//!
//! Discover pages, order them, render the index, then write (or print)
//! the result. One invocation processes one checkout to completion.

use std::io;
use std::path::{Path, PathBuf};

use crate::home::{self, Mode};
use crate::index::PageIndex;
use crate::page;

/// Generator options, mapped from the command line
#[derive(Debug, Clone)]
pub struct Options {
    /// Path to the wiki checkout
    pub dir: PathBuf,
    /// Merge behavior for the Home document
    pub mode: Mode,
    /// Group pages under their tag headings instead of one flat list
    pub group_by_tags: bool,
    /// Print instead of writing
    pub dry_run: bool,
    /// Print the discovered pages as JSON (dry-run only)
    pub json: bool,
}

/// Run the generator pipeline
pub fn run(opts: &Options) -> io::Result<()> {
    let dir = resolve_dir(&opts.dir)?;
    let index = PageIndex::new(page::scan_pages(&dir)?);
    let rendered = if opts.group_by_tags {
        index.render_tagged()
    } else {
        index.render_flat()
    };

    if opts.dry_run {
        if opts.json {
            let json = serde_json::to_string_pretty(index.pages())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            println!("{}", json);
        } else {
            print!("{}", home::render_section(&rendered));
        }
        return Ok(());
    }

    let written = home::update(&dir, &rendered, opts.mode)?;
    println!("Indexed {} pages into {}", index.len(), written.display());
    Ok(())
}

/// Validate and canonicalize the wiki directory
fn resolve_dir(dir: &Path) -> io::Result<PathBuf> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("wiki directory not found: {}", dir.display()),
        ));
    }
    // dunce avoids the \\?\ prefix on Windows
    Ok(dunce::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::constants as C;

    fn options(dir: &Path) -> Options {
        Options {
            dir: dir.to_path_buf(),
            mode: Mode::Insert,
            group_by_tags: false,
            dry_run: false,
            json: false,
        }
    }

    #[test]
    fn test_run_missing_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let opts = options(&temp_dir.path().join("does-not-exist"));
        let err = run(&opts).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_run_insert_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("Getting-Started.md"), "welcome\n").unwrap();
        fs::write(dir.join("api-reference.md"), "api docs\n").unwrap();
        fs::write(dir.join("Home.md"), "# My Wiki\n").unwrap();

        run(&options(dir)).unwrap();

        let home = fs::read_to_string(dir.join(C::HOME_FILENAME)).unwrap();
        assert_eq!(
            home,
            "# My Wiki\n\n\
             <!--start Page Index-->\n\
             - [API Reference](api-reference.md)\n\
             - [Getting Started](Getting-Started.md)\n\
             <!--end Page Index-->\n"
        );
        assert_eq!(fs::read_to_string(dir.join("Home.md.old")).unwrap(), "# My Wiki\n");
    }

    #[test]
    fn test_run_replace_bootstrap() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("Only-Page.md"), "content\n").unwrap();

        let mut opts = options(dir);
        opts.mode = Mode::Replace;
        run(&opts).unwrap();

        let home = fs::read_to_string(dir.join(C::HOME_FILENAME)).unwrap();
        assert_eq!(
            home,
            "<!--start Page Index-->\n- [Only Page](Only-Page.md)\n<!--end Page Index-->\n"
        );
    }

    #[test]
    fn test_run_empty_wiki_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();

        let mut opts = options(dir);
        opts.mode = Mode::Replace;
        run(&opts).unwrap();

        let home = fs::read_to_string(dir.join(C::HOME_FILENAME)).unwrap();
        assert_eq!(home, "<!--start Page Index-->\n<!--end Page Index-->\n");
    }

    #[test]
    fn test_run_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("Some-Page.md"), "content\n").unwrap();

        let mut opts = options(dir);
        opts.dry_run = true;
        run(&opts).unwrap();

        assert!(!dir.join(C::HOME_FILENAME).exists());
    }
}
