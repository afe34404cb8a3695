use crate::intervals::Span;
use crate::steppable::Steppable;
use itertools::Itertools;

/// Consolidates a series in which all intervals stand for the same value,
/// into the smallest number of intervals that cover exactly the same keys.
///
/// Unlike [`crate::rebuild()`], the input may overlap and may have gaps.
/// Overlapping or adjacent intervals are merged, and gaps are preserved:
///
/// ```text
///    input     [-----]  [-----]      [----]
///                 [------]   [--]          [---]
///    output    [-----------------]   [---------]
/// ```
///
/// The output is sorted by start.
#[must_use]
pub fn merge<I, S>(series: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: Span,
{
    let mut items = series
        .into_iter()
        .sorted_by(|a, b| a.start().cmp(b.start()));
    let mut result = Vec::new();
    let Some(mut current) = items.next() else {
        return result;
    };

    for item in items {
        if item.end() <= current.end() {
            // fully inside current
        } else if item.start() <= current.end()
            || current.end().precedes(item.start())
        {
            current.set_end(item.end().clone());
        } else {
            result.push(std::mem::replace(&mut current, item));
        }
    }
    result.push(current);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::intervals::Interval;

    fn intv(start: i32, end: i32) -> Interval<i32> {
        Interval::new(start, end, ()).unwrap()
    }

    #[test]
    fn test_gap_preserved() {
        let series = vec![intv(0, 49), intv(51, 99)];
        assert_eq!(merge(series.clone()), series);
    }

    #[test]
    fn test_adjacent() {
        assert_eq!(merge(vec![intv(51, 99), intv(0, 50)]), vec![intv(0, 99)]);
    }

    #[test]
    fn test_overlapping() {
        let series = vec![
            intv(10, 20),
            intv(0, 5),
            intv(12, 14),
            intv(15, 30),
            intv(40, 45),
            intv(46, 46),
            intv(3, 8),
        ];
        assert_eq!(
            merge(series),
            vec![intv(0, 8), intv(10, 30), intv(40, 46)],
        );
    }

    #[test]
    fn test_boundaries() {
        let series = vec![
            intv(i32::MIN, -1),
            intv(0, i32::MAX),
            intv(i32::MAX, i32::MAX),
        ];
        assert_eq!(merge(series), vec![intv(i32::MIN, i32::MAX)]);
    }

    #[test]
    fn test_empty() {
        assert!(merge(Vec::<Interval<i32>>::new()).is_empty());
    }
}
