use crate::errors::{Error, Result};
use crate::intervals::Span;
use crate::steppable::Steppable;

/// How an interval being inserted (src) relates to an interval already in
/// the series (item).  When several could apply, the first one listed wins.
///
/// ```text
///    Covers           [---- src ----]
///                        [-item-]
///
///    Inside              [-src-]
///                     [---- item ----]
///
///    OverlapsStart    [-- src --]
///                          [--- item ---]
///
///    OverlapsEnd              [--- src ---]
///                     [-- item --]
///
///    Precedes         [- src -][- item -]
///    Follows          [- item -][- src -]
///    Disjoint         [- src -]   [- item -]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Covers,
    Inside,
    OverlapsStart,
    OverlapsEnd,
    Precedes,
    Follows,
    Disjoint,
}

impl Relation {
    #[must_use]
    pub fn classify<S: Span>(src: &S, item: &S) -> Relation {
        if src.covers(item) {
            Relation::Covers
        } else if item.start() < src.start() && src.end() < item.end() {
            Relation::Inside
        } else if src.start() <= item.start()
            && item.start() <= src.end()
            && src.end() < item.end()
        {
            Relation::OverlapsStart
        } else if item.start() < src.start()
            && src.start() <= item.end()
            && item.end() <= src.end()
        {
            Relation::OverlapsEnd
        } else if src.end().precedes(item.start()) {
            Relation::Precedes
        } else if item.end().precedes(src.start()) {
            Relation::Follows
        } else {
            Relation::Disjoint
        }
    }
}

/// What happens to an existing item once it was compared to the tracker.
enum Outcome<S> {
    Dropped,
    Emit(S),
    Split(S, S),
}

/// Inserts src into a continuous series.
///
/// Neighbours are shrunk, split or merged (when `is_equal` says they carry
/// the same value as the interval they touch) so that the output is still
/// continuous and non-overlapping.  `clone` is used only when an existing
/// interval has to be split in two.
///
/// The result is lazy and reads the input only once.  Its items are, in
/// order, every surviving interval, then the interval that src finally
/// became.  If the input was not empty but src neither overlapped nor
/// touched any of its intervals, one last `Err(Error::Continuity)` is
/// produced: the output would have a gap.  That error is only seen by a
/// consumer that drains the iterator, and everything emitted before it is
/// still correct, so a caller may choose to keep it.
pub fn insert<I, S, E, C>(
    series: I,
    src: S,
    is_equal: E,
    clone: C,
) -> Result<Insert<I::IntoIter, S, E, C>>
where
    I: IntoIterator<Item = S>,
    S: Span,
    E: FnMut(&S, &S) -> bool,
    C: FnMut(&S) -> S,
{
    if !src.is_valid() {
        return Err(Error::invalid_range(src.start(), src.end()));
    }
    Ok(Insert {
        items: series.into_iter(),
        tracker: Some(src),
        pending: None,
        failure: None,
        seen_items: false,
        touched: false,
        is_equal,
        clone,
    })
}

/// The iterator returned by [`insert()`]
pub struct Insert<I, S, E, C> {
    items: I,

    // The interval being inserted.  It is replaced by the existing item
    // whenever the two get merged, and is None once emitted.
    tracker: Option<S>,

    // Right part of a split item, to be emitted on the next call
    pending: Option<S>,

    // Reported once the tracker has been emitted
    failure: Option<Error>,

    seen_items: bool,
    touched: bool,
    is_equal: E,
    clone: C,
}

impl<I, S, E, C> Insert<I, S, E, C>
where
    I: Iterator<Item = S>,
    S: Span,
    E: FnMut(&S, &S) -> bool,
    C: FnMut(&S) -> S,
{
    /// Compare one existing item with the tracker, and return the new
    /// tracker along with what should be done with the item.
    fn step(&mut self, src: S, mut item: S) -> Result<(S, Outcome<S>)> {
        let relation = Relation::classify(&src, &item);
        log::trace!(
            "insert [{:?}, {:?}] vs [{:?}, {:?}]: {:?}",
            src.start(),
            src.end(),
            item.start(),
            item.end(),
            relation,
        );
        if relation == Relation::Disjoint {
            return Ok((src, Outcome::Emit(item)));
        }

        self.touched = true;
        let equal = (self.is_equal)(&src, &item);

        Ok(match relation {
            Relation::Covers if equal => {
                item.set_bounds(src.start().clone(), src.end().clone());
                (item, Outcome::Dropped)
            }
            Relation::Covers => (src, Outcome::Dropped),
            Relation::Inside if equal => (item, Outcome::Dropped),
            Relation::Inside => {
                let mut right = (self.clone)(&item);
                right.set_start(src.end().next()?);
                item.set_end(src.start().previous()?);
                (src, Outcome::Split(item, right))
            }
            Relation::OverlapsStart | Relation::Precedes if equal => {
                item.set_start(src.start().clone());
                (item, Outcome::Dropped)
            }
            Relation::OverlapsStart => {
                item.set_start(src.end().next()?);
                (src, Outcome::Emit(item))
            }
            Relation::OverlapsEnd | Relation::Follows if equal => {
                item.set_end(src.end().clone());
                (item, Outcome::Dropped)
            }
            Relation::OverlapsEnd => {
                item.set_end(src.start().previous()?);
                (src, Outcome::Emit(item))
            }
            Relation::Precedes | Relation::Follows | Relation::Disjoint => {
                (src, Outcome::Emit(item))
            }
        })
    }
}

impl<I, S, E, C> Iterator for Insert<I, S, E, C>
where
    I: Iterator<Item = S>,
    S: Span,
    E: FnMut(&S, &S) -> bool,
    C: FnMut(&S) -> S,
{
    type Item = Result<S>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(right) = self.pending.take() {
            return Some(Ok(right));
        }
        if let Some(err) = self.failure.take() {
            return Some(Err(err));
        }

        let mut src = self.tracker.take()?;
        loop {
            let Some(item) = self.items.next() else {
                if self.seen_items && !self.touched {
                    log::debug!(
                        "insert [{:?}, {:?}] leaves a gap in the series",
                        src.start(),
                        src.end(),
                    );
                    self.failure = Some(Error::Continuity(format!(
                        "inserting [{:?}, {:?}] would leave a gap",
                        src.start(),
                        src.end(),
                    )));
                }
                return Some(Ok(src));
            };
            self.seen_items = true;

            match self.step(src, item) {
                Err(err) => return Some(Err(err)),
                Ok((tracker, Outcome::Dropped)) => src = tracker,
                Ok((tracker, Outcome::Emit(item))) => {
                    self.tracker = Some(tracker);
                    return Some(Ok(item));
                }
                Ok((tracker, Outcome::Split(left, right))) => {
                    self.tracker = Some(tracker);
                    self.pending = Some(right);
                    return Some(Ok(left));
                }
            }
        }
    }
}

impl<I, S, E, C> std::iter::FusedIterator for Insert<I, S, E, C>
where
    I: Iterator<Item = S>,
    S: Span,
    E: FnMut(&S, &S) -> bool,
    C: FnMut(&S) -> S,
{
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::intervals::Interval;

    type Intv = Interval<i32, &'static str>;

    fn intv(start: i32, end: i32, value: &'static str) -> Intv {
        Interval::new(start, end, value).unwrap()
    }

    fn same(a: &Intv, b: &Intv) -> bool {
        a.value == b.value
    }

    /// Insert and return the output sorted by start
    fn run(series: Vec<Intv>, src: Intv) -> Result<Vec<Intv>> {
        let mut out = insert(series, src, same, Intv::clone)?
            .collect::<Result<Vec<_>>>()?;
        out.sort_by_key(|i| i.start);
        Ok(out)
    }

    #[test]
    fn test_classify() {
        let item = intv(10, 20, "");
        let check = |s, e| Relation::classify(&intv(s, e, ""), &item);
        assert_eq!(check(10, 20), Relation::Covers);
        assert_eq!(check(5, 25), Relation::Covers);
        assert_eq!(check(11, 19), Relation::Inside);
        assert_eq!(check(5, 15), Relation::OverlapsStart);
        assert_eq!(check(10, 15), Relation::OverlapsStart);
        assert_eq!(check(15, 25), Relation::OverlapsEnd);
        assert_eq!(check(15, 20), Relation::OverlapsEnd);
        assert_eq!(check(1, 9), Relation::Precedes);
        assert_eq!(check(21, 30), Relation::Follows);
        assert_eq!(check(1, 8), Relation::Disjoint);
        assert_eq!(check(22, 30), Relation::Disjoint);
    }

    #[test]
    fn test_merge_adjacent() {
        let out = run(vec![intv(1, 50, "A")], intv(51, 100, "A")).unwrap();
        assert_eq!(out, vec![intv(1, 100, "A")]);

        let out = run(vec![intv(51, 100, "A")], intv(1, 50, "A")).unwrap();
        assert_eq!(out, vec![intv(1, 100, "A")]);
    }

    #[test]
    fn test_adjacent_different() {
        let out = run(vec![intv(1, 50, "A")], intv(51, 100, "B")).unwrap();
        assert_eq!(out, vec![intv(1, 50, "A"), intv(51, 100, "B")]);
    }

    #[test]
    fn test_overwrite_tail() {
        let out = run(vec![intv(1, 100, "A")], intv(51, 100, "B")).unwrap();
        assert_eq!(out, vec![intv(1, 50, "A"), intv(51, 100, "B")]);
    }

    #[test]
    fn test_overwrite_head() {
        let out = run(vec![intv(1, 100, "A")], intv(1, 10, "B")).unwrap();
        assert_eq!(out, vec![intv(1, 10, "B"), intv(11, 100, "A")]);
    }

    #[test]
    fn test_split() {
        let out = run(vec![intv(1, 100, "A")], intv(20, 50, "X")).unwrap();
        assert_eq!(
            out,
            vec![intv(1, 19, "A"), intv(20, 50, "X"), intv(51, 100, "A")],
        );

        // Same value: nothing changes
        let out = run(vec![intv(1, 100, "A")], intv(20, 50, "A")).unwrap();
        assert_eq!(out, vec![intv(1, 100, "A")]);
    }

    #[test]
    fn test_covers() {
        let series = vec![
            intv(1, 10, "A"),
            intv(11, 20, "B"),
            intv(21, 30, "C"),
            intv(31, 40, "D"),
        ];
        let out = run(series.clone(), intv(11, 30, "X")).unwrap();
        assert_eq!(
            out,
            vec![intv(1, 10, "A"), intv(11, 30, "X"), intv(31, 40, "D")],
        );

        // Overwrites parts of A and D, absorbs B, drops C
        let out = run(series.clone(), intv(5, 35, "B")).unwrap();
        assert_eq!(
            out,
            vec![intv(1, 4, "A"), intv(5, 35, "B"), intv(36, 40, "D")],
        );

        // Extends the domain on both sides
        let out = run(series, intv(0, 41, "Z")).unwrap();
        assert_eq!(out, vec![intv(0, 41, "Z")]);
    }

    #[test]
    fn test_merge_both_neighbours() {
        let series = vec![intv(1, 10, "A"), intv(11, 20, "B"), intv(21, 30, "A")];
        let out = run(series, intv(11, 20, "A")).unwrap();
        assert_eq!(out, vec![intv(1, 30, "A")]);
    }

    #[test]
    fn test_extend_domain() {
        let out = run(vec![intv(1, 10, "A")], intv(11, 20, "B")).unwrap();
        assert_eq!(out, vec![intv(1, 10, "A"), intv(11, 20, "B")]);

        let out = run(vec![intv(1, 10, "A")], intv(-5, 0, "B")).unwrap();
        assert_eq!(out, vec![intv(-5, 0, "B"), intv(1, 10, "A")]);
    }

    #[test]
    fn test_empty_series() {
        let out = run(vec![], intv(3, 4, "A")).unwrap();
        assert_eq!(out, vec![intv(3, 4, "A")]);
    }

    #[test]
    fn test_invalid_range() {
        let src = Interval {
            start: 5,
            end: 4,
            value: "A",
        };
        assert!(matches!(
            insert(vec![intv(1, 10, "A")], src, same, Intv::clone),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_gap() {
        let series = vec![intv(1, 10, "A"), intv(11, 20, "B")];
        assert!(matches!(
            run(series.clone(), intv(22, 30, "A")),
            Err(Error::Continuity(_))
        ));

        // Partial results are still available before the error
        let items: Vec<_> = insert(series, intv(22, 30, "A"), same, Intv::clone)
            .unwrap()
            .collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], Ok(intv(1, 10, "A")));
        assert_eq!(items[1], Ok(intv(11, 20, "B")));
        assert_eq!(items[2], Ok(intv(22, 30, "A")));
        assert!(matches!(items[3], Err(Error::Continuity(_))));
    }

    #[test]
    fn test_gap_not_reported_when_not_drained() {
        let series = vec![intv(1, 10, "A"), intv(11, 20, "B")];
        let mut iter =
            insert(series, intv(40, 50, "C"), same, Intv::clone).unwrap();
        assert_eq!(iter.next(), Some(Ok(intv(1, 10, "A"))));
        drop(iter);
    }

    #[test]
    fn test_fused() {
        let mut iter =
            insert(vec![intv(1, 10, "A")], intv(1, 10, "B"), same, Intv::clone)
                .unwrap();
        assert_eq!(iter.next(), Some(Ok(intv(1, 10, "B"))));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_boundaries() {
        let series = vec![intv(i32::MIN, 0, "A"), intv(1, i32::MAX, "B")];
        let out = run(series.clone(), intv(-10, 10, "C")).unwrap();
        assert_eq!(
            out,
            vec![
                intv(i32::MIN, -11, "A"),
                intv(-10, 10, "C"),
                intv(11, i32::MAX, "B"),
            ],
        );

        let out = run(series, intv(100, i32::MAX, "A")).unwrap();
        assert_eq!(
            out,
            vec![
                intv(i32::MIN, 0, "A"),
                intv(1, 99, "B"),
                intv(100, i32::MAX, "A"),
            ],
        );
    }
}
