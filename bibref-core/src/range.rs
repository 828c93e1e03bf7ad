//! Range model: ordering and containment/overlap predicates over
//! chapter/verse coordinates and entities.

use crate::types::{Cv, Entity};
use std::cmp::Ordering;

/// Chapter first, then verse. Identical to `Cv`'s derived `Ord`; kept as a
/// named comparator so the predicates below read against one vocabulary.
pub fn cv_cmp(a: Cv, b: Cv) -> Ordering {
    a.cmp(&b)
}

/// Inclusive on both ends: `start <= target <= end`.
pub fn is_between(target: Cv, start: Cv, end: Cv) -> bool {
    cv_cmp(target, start) != Ordering::Less && cv_cmp(target, end) != Ordering::Greater
}

/// Both entities refer to the same book. Start books decide — equality is
/// plain id equality.
pub fn matches_book(e1: &Entity, e2: &Entity) -> bool {
    e1.start.book == e2.start.book
}

/// The two CV intervals overlap in any configuration, including one range
/// fully inside the other. Book identity is NOT checked here; combine with
/// [`matches_book`].
pub fn matches_range(e1: &Entity, e2: &Entity) -> bool {
    is_between(e2.start.cv(), e1.start.cv(), e1.end.cv())
        || is_between(e2.end.cv(), e1.start.cv(), e1.end.cv())
        || is_between(e1.start.cv(), e2.start.cv(), e2.end.cv())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cv(c: u32, v: u32) -> Cv {
        Cv::new(c, v)
    }

    #[test]
    fn cmp_is_reflexive_and_antisymmetric() {
        let points = [cv(0, 0), cv(1, 1), cv(1, 30), cv(2, 0), cv(10, 5)];
        for a in points {
            assert_eq!(cv_cmp(a, a), Ordering::Equal);
            for b in points {
                assert_eq!(cv_cmp(a, b), cv_cmp(b, a).reverse());
            }
        }
    }

    #[test]
    fn cmp_is_transitive() {
        let a = cv(1, 9);
        let b = cv(2, 1);
        let c = cv(2, 8);
        assert_eq!(cv_cmp(a, b), Ordering::Less);
        assert_eq!(cv_cmp(b, c), Ordering::Less);
        assert_eq!(cv_cmp(a, c), Ordering::Less);
    }

    #[test]
    fn is_between_includes_both_boundaries() {
        let start = cv(2, 3);
        let end = cv(3, 10);
        assert!(is_between(start, start, end));
        assert!(is_between(end, start, end));
        assert!(is_between(cv(2, 50), start, end));
        assert!(!is_between(cv(2, 2), start, end));
        assert!(!is_between(cv(3, 11), start, end));
    }

    #[test]
    fn matches_range_covers_all_overlap_configurations() {
        let outer = Entity::span("Matt", (1, 1), (2, 10));
        let inner = Entity::span("Matt", (1, 5), (1, 9));
        let left = Entity::span("Matt", (0, 8), (1, 3));
        let right = Entity::span("Matt", (2, 5), (3, 1));
        let disjoint = Entity::span("Matt", (4, 1), (4, 9));

        // containment both ways
        assert!(matches_range(&outer, &inner));
        assert!(matches_range(&inner, &outer));
        // partial overlap on either side
        assert!(matches_range(&outer, &left));
        assert!(matches_range(&outer, &right));
        // no overlap
        assert!(!matches_range(&outer, &disjoint));
        assert!(!matches_range(&disjoint, &outer));
    }

    #[test]
    fn matches_book_ignores_ranges() {
        let a = Entity::span("Mark", (1, 1), (1, 5));
        let b = Entity::span("Mark", (9, 9), (9, 9));
        let c = Entity::span("Luke", (1, 1), (1, 5));
        assert!(matches_book(&a, &b));
        assert!(!matches_book(&a, &c));
    }
}
