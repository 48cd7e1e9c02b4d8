//! YAML front matter extraction
//!
//! Wiki pages may carry a leading `---`-delimited YAML block. Only the
//! `title` and `tags` keys are recognized; anything else is ignored. A
//! malformed block never fails a run: the page just falls back to its
//! filename-derived title.

use serde::Deserialize;

use crate::constants as C;

/// Recognized front matter keys
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Split front matter off page content
///
/// Returns the parsed front matter (when present and valid) and the body
/// that follows the closing fence. Content without a valid block is
/// returned unchanged.
pub fn extract(content: &str) -> (Option<FrontMatter>, &str) {
    let Some(block_start) = opening_fence_end(content) else {
        return (None, content);
    };

    // Find the closing fence line, tracking byte offsets
    let mut offset = block_start;
    for line in content[block_start..].split_inclusive('\n') {
        let trimmed = line.trim_end_matches('\n').trim_end_matches('\r');
        if trimmed == C::FRONT_MATTER_FENCE {
            let block = &content[block_start..offset];
            if block.len() > C::MAX_FRONT_MATTER_SIZE {
                return (None, content);
            }
            return match serde_yaml::from_str::<FrontMatter>(block) {
                Ok(front) => (Some(front), &content[offset + line.len()..]),
                Err(_) => (None, content),
            };
        }
        offset += line.len();
    }

    // Opening fence without a closing one
    (None, content)
}

/// Offset just past the opening fence line, if the content starts with one
fn opening_fence_end(content: &str) -> Option<usize> {
    let line = content.split_inclusive('\n').next()?;
    let trimmed = line.trim_end_matches('\n').trim_end_matches('\r');
    if trimmed == C::FRONT_MATTER_FENCE && line.len() > trimmed.len() {
        Some(line.len())
    } else {
        None
    }
}
