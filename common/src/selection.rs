//! Rating-weighted random pick used by the "Pick Random Problem" button.
//!
//! Candidates are filtered by an optional exact rating and by a set of folder
//! paths, then drawn with probability proportional to their weight. The random
//! source is passed in so callers and tests control it.

use std::collections::BTreeSet;

use rand::Rng;

use crate::model::solution::SolutionRecord;

/// Weight of a record that has no rating yet.
pub const UNRATED_WEIGHT: u32 = 5;

/// The rating itself for rated records, `UNRATED_WEIGHT` otherwise. Never zero.
pub fn weight(record: &SolutionRecord) -> u32 {
    match record.rating {
        Some(rating) if rating > 0 => u32::from(rating),
        _ => UNRATED_WEIGHT,
    }
}

/// True when `filename` is `folder` itself or lies below it.
///
/// `"a/b/c"` is inside `"a/b"`, `"a/bx/c"` is not.
pub fn matches_folder(filename: &str, folder: &str) -> bool {
    filename == folder
        || filename
            .strip_prefix(folder)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Records passing both filters, in their original order.
///
/// With `rating_filter` set only records with exactly that rating are kept;
/// unrated records never match. A non-empty `folder_filter` keeps records
/// inside any one of its folders.
pub fn candidates<'a>(
    records: &'a [SolutionRecord],
    rating_filter: Option<u8>,
    folder_filter: &BTreeSet<String>,
) -> Vec<&'a SolutionRecord> {
    records
        .iter()
        .filter(|r| rating_filter.is_none_or(|wanted| r.rating == Some(wanted)))
        .filter(|r| {
            folder_filter.is_empty()
                || folder_filter
                    .iter()
                    .any(|folder| matches_folder(&r.filename, folder))
        })
        .collect()
}

/// Picks one record among the filtered candidates, weighted by `weight`.
///
/// Returns `None` when no record passes the filters. A single uniform value in
/// `[0, total)` is drawn and the candidates' weights are subtracted from it in
/// order; the first candidate that brings the remainder to zero or below wins.
pub fn pick_random<'a, R: Rng>(
    records: &'a [SolutionRecord],
    rating_filter: Option<u8>,
    folder_filter: &BTreeSet<String>,
    rng: &mut R,
) -> Option<&'a SolutionRecord> {
    let candidates = candidates(records, rating_filter, folder_filter);
    let total: u32 = candidates.iter().map(|r| weight(r)).sum();
    if total == 0 {
        return None;
    }

    let mut remaining = rng.gen_range(0.0..f64::from(total));
    for candidate in &candidates {
        remaining -= f64::from(weight(candidate));
        if remaining <= 0.0 {
            return Some(*candidate);
        }
    }
    // Rounding can leave a sliver above zero after the last subtraction.
    candidates.last().copied()
}
