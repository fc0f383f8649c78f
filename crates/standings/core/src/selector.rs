//! Car-class cycling for the "tap to advance" affordance.
//!
//! Every call yields a member of `class_ids` whenever the list is non-empty, so
//! the selection can never get stuck on an id that no longer exists.
use crate::ids::CarClassId;

/// Returns the class after `current` in cycle order, wrapping at the end.
///
/// An empty list yields [`CarClassId::UNKNOWN`]. A `current` that is not in the
/// list (stale id from an earlier session, or unresolved) yields the first
/// class.
pub fn next_class(class_ids: &[CarClassId], current: CarClassId) -> CarClassId {
    next_class_or_self(class_ids, current, CarClassId::UNKNOWN)
}

/// Like [`next_class`], but a `current` that is not in the list falls back to
/// the viewer's own class when that class is itself listed.
pub fn next_class_or_self(
    class_ids: &[CarClassId],
    current: CarClassId,
    self_class: CarClassId,
) -> CarClassId {
    let Some(&first) = class_ids.first() else {
        return CarClassId::UNKNOWN;
    };

    match class_ids.iter().position(|&id| id == current) {
        Some(index) => class_ids[(index + 1) % class_ids.len()],
        None if self_class.is_known() && class_ids.contains(&self_class) => self_class,
        None => first,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<CarClassId> {
        raw.iter().copied().map(CarClassId).collect()
    }

    #[test]
    fn empty_list_yields_unknown() {
        assert_eq!(next_class(&[], CarClassId(83)), CarClassId::UNKNOWN);
        assert_eq!(
            next_class_or_self(&[], CarClassId(83), CarClassId(83)),
            CarClassId::UNKNOWN
        );
    }

    #[test]
    fn single_class_wraps_to_itself() {
        assert_eq!(next_class(&ids(&[83]), CarClassId(83)), CarClassId(83));
    }

    #[test]
    fn two_classes_alternate() {
        let classes = ids(&[83, 84]);
        assert_eq!(next_class(&classes, CarClassId(83)), CarClassId(84));
        assert_eq!(next_class(&classes, CarClassId(84)), CarClassId(83));
    }

    #[test]
    fn unknown_current_falls_back_to_first() {
        let classes = ids(&[5, 6, 7]);
        assert_eq!(next_class(&classes, CarClassId(99)), CarClassId(5));
        assert_eq!(next_class(&classes, CarClassId::UNKNOWN), CarClassId(5));
    }

    #[test]
    fn unknown_current_prefers_listed_self_class() {
        let classes = ids(&[5, 6, 7]);
        assert_eq!(
            next_class_or_self(&classes, CarClassId(99), CarClassId(6)),
            CarClassId(6)
        );
        // Self class from another session is ignored.
        assert_eq!(
            next_class_or_self(&classes, CarClassId(99), CarClassId(42)),
            CarClassId(5)
        );
    }

    #[test]
    fn always_returns_a_member() {
        let lists = [ids(&[1]), ids(&[1, 2]), ids(&[10, 3, 7, 4]), ids(&[2, 2, 9])];
        for classes in &lists {
            for current in 0..12 {
                let next = next_class(classes, CarClassId(current));
                assert!(classes.contains(&next), "{next} not in {classes:?}");
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_member_start_only() {
        let classes = ids(&[10, 3, 7, 4]);

        for &start in &classes {
            let mut current = start;
            for _ in 0..classes.len() {
                current = next_class(&classes, current);
            }
            assert_eq!(current, start);
        }

        let stale = CarClassId(99);
        let mut current = stale;
        for _ in 0..classes.len() {
            current = next_class(&classes, current);
        }
        assert_ne!(current, stale);
    }
}
