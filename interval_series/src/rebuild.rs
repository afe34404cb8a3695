use crate::errors::Result;
use crate::intervals::Span;
use crate::steppable::Steppable;
use itertools::Itertools;

/// Restores a minimal representation of a continuous series, by merging
/// adjacent intervals for which `is_equal` returns true.  This is typically
/// needed after a number of [`crate::update()`] calls fragmented the series.
///
/// The input does not need to be sorted.  It is treated as continuous:
/// each interval is closed just before the next one starts, which removes
/// overlaps but does not report gaps (use [`crate::verify()`] for that).
/// The output is sorted by start.
pub fn rebuild<I, S, E>(series: I, mut is_equal: E) -> Result<Vec<S>>
where
    I: IntoIterator<Item = S>,
    S: Span,
    E: FnMut(&S, &S) -> bool,
{
    let mut items = series
        .into_iter()
        .sorted_by(|a, b| a.start().cmp(b.start()));
    let mut result = Vec::new();
    let Some(mut current) = items.next() else {
        return Ok(result);
    };

    for item in items {
        if is_equal(&current, &item) {
            if item.end() > current.end() {
                current.set_end(item.end().clone());
            }
        } else {
            current.set_end(item.start().previous()?);
            result.push(std::mem::replace(&mut current, item));
        }
    }
    result.push(current);

    log::trace!("rebuild produced {} intervals", result.len());
    Ok(result)
}
