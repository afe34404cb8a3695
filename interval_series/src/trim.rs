use crate::intervals::Span;

/// Restrict the series to keys greater than or equal to start.
/// Intervals that end before start are dropped, and those that straddle
/// start are clamped to it.  The order of the series is preserved.
#[must_use]
pub fn trim_start<I>(
    series: I,
    start: <I::Item as Span>::Key,
) -> TrimStart<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Span,
{
    TrimStart {
        items: series.into_iter(),
        start,
    }
}

/// Restrict the series to keys less than or equal to end.
/// Intervals that start after end are dropped, and those that straddle end
/// are clamped to it.  The order of the series is preserved.
#[must_use]
pub fn trim_end<I>(
    series: I,
    end: <I::Item as Span>::Key,
) -> TrimEnd<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Span,
{
    TrimEnd {
        items: series.into_iter(),
        end,
    }
}

/// The iterator returned by [`trim_start()`]
pub struct TrimStart<I: Iterator>
where
    I::Item: Span,
{
    items: I,
    start: <I::Item as Span>::Key,
}

impl<I: Iterator> Iterator for TrimStart<I>
where
    I::Item: Span,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for mut item in self.items.by_ref() {
            if *item.end() < self.start {
                continue;
            }
            if *item.start() < self.start {
                item.set_start(self.start.clone());
            }
            return Some(item);
        }
        None
    }
}

/// The iterator returned by [`trim_end()`]
pub struct TrimEnd<I: Iterator>
where
    I::Item: Span,
{
    items: I,
    end: <I::Item as Span>::Key,
}

impl<I: Iterator> Iterator for TrimEnd<I>
where
    I::Item: Span,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for mut item in self.items.by_ref() {
            if *item.start() > self.end {
                continue;
            }
            if *item.end() > self.end {
                item.set_end(self.end.clone());
            }
            return Some(item);
        }
        None
    }
}
