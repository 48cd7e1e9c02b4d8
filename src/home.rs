//! Home document maintenance
//!
//! Splices the rendered index into the sentinel-delimited region of the
//! Home document. Bytes outside the region are preserved exactly, and the
//! previous document is kept as a `.old` backup before every overwrite.
//! Unbalanced markers abort before anything is touched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants as C;

/// Merge behavior for the Home document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The rendered section becomes the entire file (bootstrap)
    Replace,
    /// Splice the rendered index between the sentinel markers
    Insert,
}

/// Byte range of the generated region inside an existing document
struct Region {
    /// Offset just past the start-marker line
    body_start: usize,
    /// Offset of the first byte of the end-marker line
    body_end: usize,
}

/// Update (or create) the Home document in `dir`, returning its path
///
/// The new content is computed in full before any file is written, so a
/// malformed document fails the run without a backup or a partial write.
pub fn update(dir: &Path, rendered: &str, mode: Mode) -> io::Result<PathBuf> {
    let home_path = dir.join(C::HOME_FILENAME);
    let existing = match fs::read_to_string(&home_path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e),
    };

    let new_content = match (mode, &existing) {
        (Mode::Replace, _) | (Mode::Insert, None) => render_section(rendered),
        (Mode::Insert, Some(content)) => match find_region(content)? {
            Some(region) => splice(content, &region, rendered),
            None => append_section(content, rendered),
        },
    };

    if existing.is_some() {
        let backup_path = dir.join(format!("{}{}", C::HOME_FILENAME, C::BACKUP_SUFFIX));
        fs::copy(&home_path, &backup_path)?;
    }
    fs::write(&home_path, new_content)?;

    Ok(home_path)
}

/// Render the complete sentinel-delimited section
pub fn render_section(rendered: &str) -> String {
    format!("{}\n{}{}\n", C::START_MARKER, rendered, C::END_MARKER)
}

/// Locate the sentinel-delimited region
///
/// Returns `Ok(None)` when neither marker is present. Unbalanced markers
/// are an error: writing through a half-marked document would destroy
/// hand-authored content.
fn find_region(content: &str) -> io::Result<Option<Region>> {
    let mut body_start: Option<usize> = None;
    let mut body_end: Option<usize> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_end_matches('\n').trim_end_matches('\r');
        if trimmed == C::START_MARKER && body_start.is_none() {
            body_start = Some(offset + line.len());
        } else if trimmed == C::END_MARKER && body_end.is_none() {
            body_end = Some(offset);
        }
        offset += line.len();
    }

    match (body_start, body_end) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) if start <= end => {
            Ok(Some(Region { body_start: start, body_end: end }))
        }
        (Some(_), Some(_)) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "end marker precedes start marker in Home document",
        )),
        (Some(_), None) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "start marker without matching end marker in Home document",
        )),
        (None, Some(_)) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "end marker without matching start marker in Home document",
        )),
    }
}

/// Replace the region body, keeping everything else byte for byte
fn splice(content: &str, region: &Region, rendered: &str) -> String {
    let mut out = String::with_capacity(content.len() + rendered.len());
    out.push_str(&content[..region.body_start]);
    out.push_str(rendered);
    out.push_str(&content[region.body_end..]);
    out
}

/// Append a fresh sentinel-delimited section after the existing content
fn append_section(content: &str, rendered: &str) -> String {
    let mut out = String::with_capacity(content.len() + rendered.len());
    out.push_str(content);
    if !out.is_empty() {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(&render_section(rendered));
    out
}
