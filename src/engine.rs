use crate::segment::{Orientation, Segment};
use std::collections::BTreeSet;

/// The intersection engine: two append-only segment histories plus the logic
/// to measure, for a freshly-built segment, how much of it was already covered.
///
/// `horizontal` and `vertical` are scanned linearly per command; nothing here
/// requires spatial indexing at today's scale, though both could be indexed by
/// `fixed` (e.g. in a BTreeMap of parallel runs) if the per-command segment
/// count grew large enough to matter. Within a single command, colinear
/// overlap is resolved as a set of merged intervals rather than individual
/// lattice points, and perpendicular crossings are deduplicated into a sorted
/// set of crossing coordinates before being checked against those intervals —
/// so a command's cost is `O(k log k)` in the number of earlier segments it
/// touches, never in the length of the overlap itself.
#[derive(Debug, Default)]
pub struct Engine {
  horizontal: Vec<Segment>,
  vertical: Vec<Segment>,
}

impl Engine {
  pub fn new() -> Engine {
    Engine::default()
  }

  /// Records `segment` and returns the number of distinct lattice points of
  /// `segment` that coincide with a segment absorbed earlier.
  pub fn absorb(&mut self, segment: Segment) -> u64 {
    let (same_axis, cross_axis) = match segment.orientation {
      Orientation::Horizontal => (&self.horizontal, &self.vertical),
      Orientation::Vertical => (&self.vertical, &self.horizontal),
    };

    let merged = colinear_intervals(same_axis, &segment);
    let mut already_visited = merged.iter().map(|&(lo, hi)| (hi - lo + 1) as u64).sum::<u64>();

    let crossings: BTreeSet<i64> = cross_axis
      .iter()
      .filter(|other| crosses(&segment, other))
      .map(|other| other.fixed)
      .collect();
    already_visited += crossings
      .into_iter()
      .filter(|x| !covered_by(&merged, *x))
      .count() as u64;

    match segment.orientation {
      Orientation::Horizontal => self.horizontal.push(segment),
      Orientation::Vertical => self.vertical.push(segment),
    }
    already_visited
  }
}

/// Whether `perpendicular` crosses `segment`: `perpendicular.fixed` must lie on
/// `segment`'s varying axis and `segment.fixed` must lie on `perpendicular`'s.
fn crosses(segment: &Segment, perpendicular: &Segment) -> bool {
  segment.lo <= perpendicular.fixed
    && perpendicular.fixed <= segment.hi
    && perpendicular.lo <= segment.fixed
    && segment.fixed <= perpendicular.hi
}

/// Merges the overlap of `segment` against every earlier same-orientation,
/// same-`fixed` segment into a sorted list of disjoint, non-touching intervals.
fn colinear_intervals(history: &[Segment], segment: &Segment) -> Vec<(i64, i64)> {
  let mut overlaps: Vec<(i64, i64)> = history
    .iter()
    .filter(|h| h.fixed == segment.fixed)
    .filter_map(|h| {
      let lo = h.lo.max(segment.lo);
      let hi = h.hi.min(segment.hi);
      (lo <= hi).then_some((lo, hi))
    })
    .collect();
  overlaps.sort_unstable();

  let mut merged: Vec<(i64, i64)> = Vec::with_capacity(overlaps.len());
  for (lo, hi) in overlaps {
    match merged.last_mut() {
      Some((_, last_hi)) if lo <= *last_hi + 1 => *last_hi = (*last_hi).max(hi),
      _ => merged.push((lo, hi)),
    }
  }
  merged
}

/// Binary search over sorted, disjoint `intervals` for membership of `x`.
fn covered_by(intervals: &[(i64, i64)], x: i64) -> bool {
  intervals
    .binary_search_by(|&(lo, hi)| {
      if x < lo {
        std::cmp::Ordering::Greater
      } else if x > hi {
        std::cmp::Ordering::Less
      } else {
        std::cmp::Ordering::Equal
      }
    })
    .is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::segment::build_segment;
  use crate::direction::Direction::*;
  use crate::position::Position;

  #[test]
  fn first_segment_has_no_overlap() {
    let mut engine = Engine::new();
    let (s, _) = build_segment(Position::new(0, 0), East, 5);
    assert_eq!(engine.absorb(s), 0);
  }

  #[test]
  fn perpendicular_crossing_counts_once() {
    let mut engine = Engine::new();
    let (h, _) = build_segment(Position::new(0, 0), East, 10);
    engine.absorb(h);
    let (v, _) = build_segment(Position::new(5, -5), North, 10);
    assert_eq!(engine.absorb(v), 1);
  }

  #[test]
  fn colinear_overlap_counts_the_shared_interval_once() {
    let mut engine = Engine::new();
    let (a, _) = build_segment(Position::new(0, 0), East, 10);
    engine.absorb(a);
    let (b, _) = build_segment(Position::new(5, 0), East, 10);
    // b covers x in [5, 15]; overlap with a ([0, 10]) is [5, 10] -> 6 points.
    assert_eq!(engine.absorb(b), 6);
  }

  #[test]
  fn duplicate_crossings_from_distinct_segments_are_not_double_counted() {
    let mut engine = Engine::new();
    // Two earlier, non-overlapping vertical segments that both pass through
    // x = 5, meeting end-to-end at y = 0.
    let (v1, _) = build_segment(Position::new(5, -5), North, 5);
    engine.absorb(v1);
    let (v2, _) = build_segment(Position::new(5, 0), North, 5);
    engine.absorb(v2);
    // A new horizontal segment crosses both of them, but only at the single
    // shared point (5, 0).
    let (h, _) = build_segment(Position::new(0, 0), East, 10);
    assert_eq!(engine.absorb(h), 1);
  }
}
