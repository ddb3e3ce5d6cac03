use proptest::prelude::*;

use super::{merge_row, Cover};
use crate::interval::Interval;

fn iv(lo: i64, hi: i64) -> Interval {
    Interval::new(lo, hi)
}

#[test]
fn test_empty() {
    let cover = merge_row(Vec::new());
    assert!(cover.is_empty());
    assert_eq!(cover.covered(), 0);
    assert_eq!(cover.gaps(0, 4).collect::<Vec<_>>(), [iv(0, 4)]);
}

#[test]
fn test_single() {
    let cover = merge_row([iv(3, 9)]);
    assert_eq!(cover.as_slice(), &[iv(3, 9)]);
    assert_eq!(cover.covered(), 7);
}

#[test]
fn test_overlap() {
    let cover = merge_row([iv(-1, 17), iv(10, 20)]);
    assert_eq!(cover.as_slice(), &[iv(-1, 20)]);
    assert_eq!(cover.covered(), 22);
}

#[test]
fn test_contained_and_duplicated() {
    let cover = merge_row([iv(0, 10), iv(2, 3), iv(0, 10), iv(10, 10), iv(0, 4)]);
    assert_eq!(cover.as_slice(), &[iv(0, 10)]);
}

#[test]
fn test_adjacent_merges() {
    let cover = merge_row([iv(5, 6), iv(0, 4), iv(7, 7)]);
    assert_eq!(cover.as_slice(), &[iv(0, 7)]);
}

#[test]
fn test_separated_by_one() {
    let cover = merge_row([iv(7, 12), iv(0, 5)]);
    assert_eq!(cover.as_slice(), &[iv(0, 5), iv(7, 12)]);
    assert_eq!(cover.gaps(0, 12).collect::<Vec<_>>(), [iv(6, 6)]);
}

#[test]
fn test_wide_interval_after_narrow_same_start() {
    let cover = merge_row([iv(0, 1), iv(0, 8), iv(4, 5), iv(10, 11)]);
    assert_eq!(cover.as_slice(), &[iv(0, 8), iv(10, 11)]);
}

#[test]
fn test_merge_from_reuses_buffers() {
    let mut cover = Cover::new();
    let mut buf = vec![iv(0, 3), iv(8, 9)];
    cover.merge_from(&mut buf);
    assert_eq!(cover.len(), 2);

    buf.clear();
    buf.push(iv(1, 2));
    cover.merge_from(&mut buf);
    assert_eq!(cover.as_slice(), &[iv(1, 2)]);
}

#[test]
fn test_contains() {
    let cover = merge_row([iv(-5, -1), iv(2, 2), iv(10, 20)]);

    for x in [-5, -3, -1, 2, 10, 15, 20] {
        assert!(cover.contains(x), "{x}");
    }

    for x in [-6, 0, 1, 3, 9, 21] {
        assert!(!cover.contains(x), "{x}");
    }
}

#[test]
fn test_gaps_at_edges() {
    let cover = merge_row([iv(3, 5)]);
    assert_eq!(cover.gaps(0, 8).collect::<Vec<_>>(), [iv(0, 2), iv(6, 8)]);
    assert_eq!(cover.gaps(3, 5).count(), 0);
    assert_eq!(cover.gaps(4, 4).count(), 0);
    assert_eq!(cover.gaps(6, 6).collect::<Vec<_>>(), [iv(6, 6)]);
}

#[test]
fn test_gaps_window_inside_gap() {
    let cover = merge_row([iv(0, 1), iv(20, 30)]);
    assert_eq!(cover.gaps(5, 10).collect::<Vec<_>>(), [iv(5, 10)]);
}

#[test]
fn test_gaps_at_extreme_end() {
    let cover = merge_row([iv(i64::MAX - 3, i64::MAX)]);
    assert_eq!(
        cover.gaps(i64::MAX - 5, i64::MAX).collect::<Vec<_>>(),
        [iv(i64::MAX - 5, i64::MAX - 4)]
    );

    let cover = merge_row([iv(0, 1)]);
    assert_eq!(
        cover.gaps(i64::MAX - 1, i64::MAX).collect::<Vec<_>>(),
        [iv(i64::MAX - 1, i64::MAX)]
    );
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((-200i64..200, 0i64..40), 0..24)
        .prop_map(|v| v.into_iter().map(|(lo, w)| iv(lo, lo + w)).collect())
}

fn arb_shuffled() -> impl Strategy<Value = (Vec<Interval>, Vec<Interval>)> {
    arb_intervals().prop_flat_map(|input| (Just(input.clone()), Just(input).prop_shuffle()))
}

fn assert_canonical(cover: &Cover) -> Result<(), TestCaseError> {
    for pair in cover.as_slice().windows(2) {
        prop_assert!(pair[1].lo > pair[0].hi + 1, "{} then {}", pair[0], pair[1]);
        prop_assert!(!pair[0].touches(&pair[1]));
    }

    Ok(())
}

proptest! {
    #[test]
    fn merge_is_sorted_and_disjoint(input in arb_intervals()) {
        let cover = merge_row(input.iter().copied());
        assert_canonical(&cover)?;
    }

    #[test]
    fn merge_contains_every_input(input in arb_intervals()) {
        let cover = merge_row(input.iter().copied());

        for i in &input {
            prop_assert!(cover.iter().any(|c| c.contains_interval(i)), "{i} not covered");
        }
    }

    #[test]
    fn merge_covers_nothing_extra(input in arb_intervals()) {
        let cover = merge_row(input.iter().copied());

        for x in -200i64..=240 {
            let expected = input.iter().any(|i| i.contains(x));
            prop_assert_eq!(cover.contains(x), expected, "cell {}", x);
        }
    }

    #[test]
    fn merge_is_idempotent(input in arb_intervals()) {
        let once = merge_row(input.iter().copied());
        let twice = merge_row(once.iter().copied());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_ignores_order((input, shuffled) in arb_shuffled()) {
        prop_assert_eq!(merge_row(input), merge_row(shuffled));
    }

    #[test]
    fn gaps_complement_cover(input in arb_intervals(), lo in -250i64..0, w in 0i64..500) {
        let cover = merge_row(input);
        let hi = lo + w;
        let gaps = cover.gaps(lo, hi).collect::<Vec<_>>();

        let open = gaps.iter().map(Interval::len).sum::<u64>();
        let covered = (lo..=hi).filter(|x| cover.contains(*x)).count() as u64;
        prop_assert_eq!(open + covered, (hi - lo + 1) as u64);

        for g in &gaps {
            prop_assert!(!cover.contains(g.lo));
            prop_assert!(!cover.contains(g.hi));
        }
    }
}
