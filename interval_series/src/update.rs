use crate::errors::{Error, Result};
use crate::intervals::Span;
use crate::steppable::Steppable;

/// Apply `modify` to the values of the series over `[start, end]`.
///
/// Only the parts of existing intervals that overlap `[start, end]` are
/// modified: the domain of the series never changes, and gaps are not
/// filled.  Intervals that straddle start or end are split: the original
/// keeps the part outside of the range, and a copy made with `clone` is
/// modified and appended to the series.
///
/// ```text
///    update range          [------------]
///    before            [AAAAAAA][BBBBBBBBBBBBB]
///    after             [AAA][A'][B'''''''][BBB]
/// ```
///
/// The series is therefore no longer sorted afterward, and may contain
/// adjacent intervals with the same value; use [`crate::rebuild()`] to
/// restore a minimal representation.
pub fn update<S, M, C>(
    series: &mut Vec<S>,
    start: &S::Key,
    end: &S::Key,
    mut modify: M,
    mut clone: C,
) -> Result<()>
where
    S: Span,
    M: FnMut(&mut S),
    C: FnMut(&S) -> S,
{
    if start > end {
        return Err(Error::invalid_range(start, end));
    }

    // Pieces are appended once the existing intervals have all been seen
    let mut added = Vec::new();

    for item in series.iter_mut() {
        if !item.overlaps(start, end) {
            continue;
        }

        if start <= item.start() && item.end() <= end {
            log::trace!(
                "update [{:?}, {:?}] in place",
                item.start(),
                item.end()
            );
            modify(item);
        } else if item.start() < start && end < item.end() {
            log::trace!(
                "update splits [{:?}, {:?}] in three",
                item.start(),
                item.end()
            );
            let mut middle = clone(&*item);
            middle.set_bounds(start.clone(), end.clone());
            modify(&mut middle);

            let mut right = clone(&*item);
            right.set_start(end.next()?);

            item.set_end(start.previous()?);
            added.push(middle);
            added.push(right);
        } else if start <= item.start() {
            // overlaps the head of item
            let mut head = clone(&*item);
            head.set_end(end.clone());
            modify(&mut head);
            item.set_start(end.next()?);
            added.push(head);
        } else {
            // overlaps the tail of item
            let mut tail = clone(&*item);
            tail.set_start(start.clone());
            modify(&mut tail);
            item.set_end(start.previous()?);
            added.push(tail);
        }
    }

    series.append(&mut added);
    Ok(())
}
