use crate::command::Command;
use crate::engine::Engine;
use crate::position::Position;
use crate::segment::build_segment;

/// Sequences a command list through the segment builder and the intersection
/// engine and returns the count of distinct lattice points the robot occupies,
/// including its starting point.
///
/// `walked` is initialized to zero and every command contributes `steps + 1`
/// (its own length plus the junction it shares with the previous command);
/// the junction is then found again by the engine as an overlap of length one
/// and subtracted back out via `already_visited`. The very first command has
/// no predecessor, so its overlap is zero by construction and the `+1` for the
/// starting cell survives untouched.
pub fn compute(start: Position, commands: &[Command]) -> u64 {
  if commands.is_empty() {
    return 1;
  }

  let mut engine = Engine::new();
  let mut current = start;
  let mut walked: u64 = 0;
  let mut already_visited: u64 = 0;

  for command in commands {
    let (segment, next) = build_segment(current, command.direction, command.steps);
    walked += command.steps as u64 + 1;
    already_visited += engine.absorb(segment);
    current = next;
  }

  walked - already_visited
}
