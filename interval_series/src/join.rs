use crate::intervals::Span;
use itertools::Itertools;
use std::cmp::Ordering;

/// Combines two continuous series into a single one, cut at every bound of
/// either input.  Only the keys present in both series are part of the
/// output; for each of its intervals, `combine` computes the value from the
/// two intervals that contain it.
///
/// ```text
///    left      [--- a ---][------ b ------]
///    right         [---- x ----][- y -][--- z ---]
///    output        [ax-][bx---][by---][bz]
/// ```
///
/// The three series may use different types, as long as they share the
/// same key.  The output is sorted by start.
#[must_use]
pub fn join<L, R, O, LI, RI, F>(left: LI, right: RI, mut combine: F) -> Vec<O>
where
    L: Span,
    R: Span<Key = L::Key>,
    O: Span<Key = L::Key>,
    LI: IntoIterator<Item = L>,
    RI: IntoIterator<Item = R>,
    F: FnMut(&L, &R) -> O,
{
    // Sorted in reverse, so that popping returns the earliest interval
    let mut lstack: Vec<L> = left
        .into_iter()
        .sorted_by(|a, b| b.start().cmp(a.start()))
        .collect();
    let mut rstack: Vec<R> = right
        .into_iter()
        .sorted_by(|a, b| b.start().cmp(a.start()))
        .collect();

    let mut result = Vec::new();
    let mut lhs = lstack.pop();
    let mut rhs = rstack.pop();

    loop {
        let (Some(l), Some(r)) = (lhs.as_ref(), rhs.as_ref()) else {
            break;
        };

        if !(l.end() < r.start() || r.end() < l.start()) {
            let mut out = combine(l, r);
            out.set_bounds(
                std::cmp::max(l.start(), r.start()).clone(),
                std::cmp::min(l.end(), r.end()).clone(),
            );
            result.push(out);
        }

        // The side that ends last is kept, its remaining part will be
        // paired with the next interval from the other side.
        match l.end().cmp(r.end()) {
            Ordering::Less => lhs = lstack.pop(),
            Ordering::Greater => rhs = rstack.pop(),
            Ordering::Equal => {
                lhs = lstack.pop();
                rhs = rstack.pop();
            }
        }
    }

    log::trace!("join produced {} intervals", result.len());
    result
}
