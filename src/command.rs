use serde::Deserialize;

use crate::direction::Direction;

/// One instruction: move `steps` lattice units in `direction`. `steps == 0` is
/// legal and produces a degenerate, single-point segment.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Command {
  pub direction: Direction,
  pub steps: u32,
}

/// The `{x, y}` object the JSON boundary uses for a starting position.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
  pub x: i64,
  pub y: i64,
}

/// The request body accepted at `POST /tibber-developer-test/enter-path`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathRequest {
  pub start: Coordinates,
  pub commands: Vec<Command>,
}
