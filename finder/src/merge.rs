//! Splicing two token→anchor routes into one source→target route.

use anchorpath_types::{Path, PathStep};

/// Join `source` (source→anchor) and `target` (target→anchor) into a
/// source→target route.
///
/// The shared tail of both routes is dropped, the remainder of `target` is
/// walked backwards, and any loop left over is collapsed with
/// [`collapse_loops`]. Returns the empty path if either route is empty or the
/// two do not end at the same place.
pub fn merge_paths(source: &Path, target: &Path) -> Path {
    if source.is_empty() || target.is_empty() {
        return Path::empty();
    }

    let (src, dst) = (source.steps(), target.steps());
    let (mut i, mut j) = (src.len(), dst.len());
    while i > 0 && j > 0 && src[i - 1] == dst[j - 1] {
        i -= 1;
        j -= 1;
    }
    if i == src.len() {
        return Path::empty();
    }

    // src[i] is the last element still shared with dst: the meeting point.
    let mut merged = Vec::with_capacity(i + j + 1);
    merged.extend_from_slice(&src[..=i]);
    merged.extend(dst[..j].iter().rev().copied());

    Path::from_steps(collapse(&merged))
}

/// Remove detours: whenever an element reappears later in the same role,
/// everything between the two occurrences is dropped.
///
/// A token seen once as a plain token and once as an anchor is not a loop.
/// Idempotent.
pub fn collapse_loops(path: &Path) -> Path {
    Path::from_steps(collapse(path.steps()))
}

fn collapse(steps: &[PathStep]) -> Vec<PathStep> {
    let mut out = Vec::with_capacity(steps.len());
    let mut p = 0;
    while p < steps.len() {
        let step = steps[p];
        if let Some(offset) = steps[p + 1..].iter().rposition(|s| *s == step) {
            p += 1 + offset;
        }
        out.push(steps[p]);
        p += 1;
    }
    out
}
