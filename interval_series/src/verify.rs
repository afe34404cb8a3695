use crate::errors::{Error, Result};
use crate::intervals::Span;
use crate::steppable::Steppable;
use itertools::Itertools;

/// Whether the series is continuous and non-overlapping, and every interval
/// in it is valid (start <= end).  The series does not need to be sorted.
///
/// When fail_fast is true, the first violation found is returned as an
/// error (`InvalidRange`, `Overlap` or `Continuity`) instead of `Ok(false)`.
pub fn verify<'a, S, I>(series: I, fail_fast: bool) -> Result<bool>
where
    S: Span + 'a,
    I: IntoIterator<Item = &'a S>,
{
    match check(series, true).into_iter().next() {
        None => Ok(true),
        Some(err) if fail_fast => Err(err),
        Some(err) => {
            log::debug!("verify: {err}");
            Ok(false)
        }
    }
}

/// Every reason why the series is not continuous and non-overlapping.
/// This checks all intervals, and all pairs of consecutive intervals once
/// the series is sorted, and is empty for a valid series.
#[must_use]
pub fn violations<'a, S, I>(series: I) -> Vec<Error>
where
    S: Span + 'a,
    I: IntoIterator<Item = &'a S>,
{
    check(series, false)
}

fn check<'a, S, I>(series: I, stop_at_first: bool) -> Vec<Error>
where
    S: Span + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut errors = Vec::new();
    let mut previous: Option<&S> = None;

    for item in series
        .into_iter()
        .sorted_by(|a, b| a.start().cmp(b.start()))
    {
        if !item.is_valid() {
            errors.push(Error::invalid_range(item.start(), item.end()));
        }
        if let Some(prev) = previous {
            if prev.end() >= item.start() {
                errors.push(Error::Overlap(format!(
                    "[{:?}, {:?}] overlaps [{:?}, {:?}]",
                    prev.start(),
                    prev.end(),
                    item.start(),
                    item.end(),
                )));
            } else if !prev.end().precedes(item.start()) {
                errors.push(Error::Continuity(format!(
                    "gap between {:?} and {:?}",
                    prev.end(),
                    item.start(),
                )));
            }
        }
        if stop_at_first && !errors.is_empty() {
            break;
        }
        previous = Some(item);
    }
    errors
}
