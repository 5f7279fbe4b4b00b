//! Structural distance between postal codes.
//!
//! No geocoding happens here. The score is a proxy built from the code text
//! alone: the two-digit sector dominates, and the remaining four digits break
//! ties inside a sector. It is not a geographic distance, but sectors are
//! assigned geographically, so sector-first ordering tracks real adjacency
//! well enough for greedy route construction.

use crate::code::PostalCode;

/// Weight applied to the sector difference so it dominates the digit term.
///
/// The maximum digit term is 9 * 4 = 36, so any sector difference outranks
/// any intra-sector difference.
const SECTOR_WEIGHT: u32 = 100;

/// Scores the dissimilarity of two postal codes.
///
/// Symmetric, zero for equal codes, and purely structural: sector difference
/// times [`SECTOR_WEIGHT`], plus the per-position digit differences of the
/// remaining four characters.
pub fn structural_distance(a: &PostalCode, b: &PostalCode) -> u32 {
    let sector_term = a.sector().abs_diff(b.sector()) * SECTOR_WEIGHT;

    let digit_term: u32 = a
        .as_str()
        .bytes()
        .zip(b.as_str().bytes())
        .skip(2)
        .map(|(x, y)| u32::from(x.abs_diff(y)))
        .sum();

    sector_term + digit_term
}

/// Index of the pool entry nearest to `anchor`, or `None` for an empty pool.
///
/// Ties go to the first-encountered candidate in pool order, which keeps
/// plans reproducible. The pool is never mutated; removal is the caller's
/// job.
pub fn nearest(anchor: &PostalCode, pool: &[PostalCode]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, candidate) in pool.iter().enumerate() {
        let score = structural_distance(anchor, candidate);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}
