use serde::Deserialize;

/// One of the four cardinal directions the robot can move in.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  East,
  West,
  North,
  South,
}
use Direction::*;

impl Direction {
  /// The unit displacement `(dx, dy)` a single step in this direction produces.
  pub fn unit_vector(self) -> (i64, i64) {
    match self {
      East => (1, 0),
      West => (-1, 0),
      North => (0, 1),
      South => (0, -1),
    }
  }
}
