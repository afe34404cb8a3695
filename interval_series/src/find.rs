use crate::errors::{Error, Result};
use crate::intervals::Span;

/// Returns the first interval that contains key.
/// The series is scanned linearly, so it does not need to be sorted.
#[must_use]
pub fn find<'a, S, I>(series: I, key: &S::Key) -> Option<&'a S>
where
    S: Span + 'a,
    I: IntoIterator<Item = &'a S>,
{
    series.into_iter().find(|item| item.contains(key))
}

/// Same as [`find()`], but returns a mutable reference so that the value
/// of the interval can be changed in place.
#[must_use]
pub fn find_mut<'a, S, I>(series: I, key: &S::Key) -> Option<&'a mut S>
where
    S: Span + 'a,
    I: IntoIterator<Item = &'a mut S>,
{
    series.into_iter().find(|item| item.contains(key))
}

/// Same as [`find()`], but it is an error if no interval contains key.
pub fn find_required<'a, S, I>(series: I, key: &S::Key) -> Result<&'a S>
where
    S: Span + 'a,
    I: IntoIterator<Item = &'a S>,
{
    find(series, key).ok_or_else(|| {
        Error::NotFound(format!("no interval contains {key:?}"))
    })
}

/// All the intervals that have at least one key in common with
/// `[start, end]`, in the order of the series.
pub fn find_range<'a, S, I>(
    series: I,
    start: &'a S::Key,
    end: &'a S::Key,
) -> impl Iterator<Item = &'a S>
where
    S: Span + 'a,
    I: IntoIterator<Item = &'a S>,
{
    series
        .into_iter()
        .filter(move |item| item.overlaps(start, end))
}
