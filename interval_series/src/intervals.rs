use crate::errors::{Error, Result};
use crate::steppable::Steppable;

/// A closed interval `[start, end]`, which includes both of its bounds.
///
/// All the series operations are generic over this trait, so that callers
/// can store their own types (with whatever payload they need) directly in
/// the series.  The operations only ever move the bounds; the payload is
/// handled through caller-supplied closures (`is_equal`, `clone`, `modify`).
pub trait Span {
    type Key: Steppable;

    fn start(&self) -> &Self::Key;
    fn end(&self) -> &Self::Key;
    fn set_start(&mut self, start: Self::Key);
    fn set_end(&mut self, end: Self::Key);

    /// Whether start <= end
    fn is_valid(&self) -> bool {
        self.start() <= self.end()
    }

    /// Whether key is contained in the interval
    fn contains(&self, key: &Self::Key) -> bool {
        self.start() <= key && key <= self.end()
    }

    /// Whether the interval has at least one key in common with
    /// `[start, end]`
    fn overlaps(&self, start: &Self::Key, end: &Self::Key) -> bool {
        !(start > self.end() || end < self.start())
    }

    /// Whether every key of other is also in self
    fn covers<O: Span<Key = Self::Key>>(&self, other: &O) -> bool {
        self.start() <= other.start() && other.end() <= self.end()
    }

    /// Set both bounds at once
    fn set_bounds(&mut self, start: Self::Key, end: Self::Key) {
        self.set_start(start);
        self.set_end(end);
    }
}

/// An interval `[start, end]` that carries a value.  The value defaults to
/// `()`, for series that only describe a set of keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<K, V = ()> {
    pub start: K,
    pub end: K,
    pub value: V,
}

impl<K: Steppable, V> Interval<K, V> {
    /// Build the interval `[start, end]`, which must not be empty
    pub fn new(start: K, end: K, value: V) -> Result<Self> {
        if start > end {
            return Err(Error::invalid_range(&start, &end));
        }
        Ok(Interval { start, end, value })
    }

    /// An interval that contains a single key (`[key, key]`)
    #[must_use]
    pub fn single(key: K, value: V) -> Self {
        Interval {
            start: key.clone(),
            end: key,
            value,
        }
    }

    /// Returns a copy of the bounds, with a different value
    #[must_use]
    pub fn with_value<W>(&self, value: W) -> Interval<K, W> {
        Interval {
            start: self.start.clone(),
            end: self.end.clone(),
            value,
        }
    }
}

impl<K: Steppable, V> Span for Interval<K, V> {
    type Key = K;

    fn start(&self) -> &K {
        &self.start
    }
    fn end(&self) -> &K {
        &self.end
    }
    fn set_start(&mut self, start: K) {
        self.start = start;
    }
    fn set_end(&mut self, end: K) {
        self.end = end;
    }
}

impl<K: std::fmt::Display, V> std::fmt::Display for Interval<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// The smallest interval `(start, end)` that covers every interval of the
/// series, or None if the series is empty.
/// The series does not need to be sorted.
#[must_use]
pub fn domain<'a, S, I>(series: I) -> Option<(S::Key, S::Key)>
where
    S: Span + 'a,
    I: IntoIterator<Item = &'a S>,
{
    series.into_iter().fold(None, |acc, item| match acc {
        None => Some((item.start().clone(), item.end().clone())),
        Some((lo, hi)) => Some((
            std::cmp::min(lo, item.start().clone()),
            std::cmp::max(hi, item.end().clone()),
        )),
    })
}
