#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure nearest-in-range target selection for towers.
//!
//! The world calls [`select_target`] once per tower per tick, between kills,
//! so a candidate removed by an earlier tower in the same tick is never
//! offered to a later one. Selection is deterministic: candidates are scanned
//! in the order provided and only a strictly smaller distance displaces the
//! current best, so exact distance ties resolve to the first candidate found.

use castle_defence_core::{EnemyId, WorldPoint};

/// Selects the enemy with the strictly smallest distance to `origin` that is
/// also strictly inside `range`.
///
/// Returns `None` when no candidate qualifies; an enemy sitting exactly on
/// the range boundary is out of reach.
#[must_use]
pub fn select_target<I>(origin: WorldPoint, range: f32, candidates: I) -> Option<EnemyId>
where
    I: IntoIterator<Item = (EnemyId, WorldPoint)>,
{
    let mut best: Option<EnemyId> = None;
    let mut best_distance = range;

    for (enemy, position) in candidates {
        let distance = origin.distance_to(position);
        if distance < best_distance {
            best_distance = distance;
            best = Some(enemy);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::select_target;
    use castle_defence_core::{EnemyId, WorldPoint};

    fn candidate(id: u32, x: f32, y: f32) -> (EnemyId, WorldPoint) {
        (EnemyId::new(id), WorldPoint::new(x, y))
    }

    #[test]
    fn nearest_candidate_wins() {
        let origin = WorldPoint::new(0.0, 0.0);
        let target = select_target(
            origin,
            60.0,
            vec![
                candidate(1, 50.0, 0.0),
                candidate(2, 10.0, 0.0),
                candidate(3, 30.0, 0.0),
            ],
        );
        assert_eq!(target, Some(EnemyId::new(2)));
    }

    #[test]
    fn out_of_range_candidates_are_ignored() {
        let origin = WorldPoint::new(0.0, 0.0);
        let target = select_target(origin, 60.0, vec![candidate(1, 80.0, 0.0)]);
        assert_eq!(target, None);
    }

    #[test]
    fn range_boundary_is_exclusive() {
        let origin = WorldPoint::new(0.0, 0.0);
        let target = select_target(origin, 60.0, vec![candidate(1, 60.0, 0.0)]);
        assert_eq!(target, None);
    }

    #[test]
    fn exact_ties_keep_the_first_candidate() {
        let origin = WorldPoint::new(0.0, 0.0);
        let target = select_target(
            origin,
            60.0,
            vec![candidate(7, 20.0, 0.0), candidate(3, -20.0, 0.0)],
        );
        assert_eq!(target, Some(EnemyId::new(7)));
    }

    #[test]
    fn empty_field_yields_no_target() {
        let origin = WorldPoint::new(0.0, 0.0);
        assert_eq!(select_target(origin, 60.0, Vec::new()), None);
    }

    #[test]
    fn candidate_just_inside_range_qualifies() {
        let origin = WorldPoint::new(0.0, 0.0);
        let target = select_target(origin, 60.0, vec![candidate(1, 59.9, 0.0)]);
        assert_eq!(target, Some(EnemyId::new(1)));
    }
}
