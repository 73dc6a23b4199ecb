//! Per-axis evaluation of where the target lies and whether the way is open.

use mz_core::{AxisStatus, CellProbe, Heading, Position};
use mz_host::Robot;

/// `1` if the target is north of `current`, `-1` if south, `0` if level.
#[inline]
pub fn vertical_sense(current: Position, target: Position) -> i8 {
    // y grows southward, so "north" is the smaller y.
    match target.y.cmp(&current.y) {
        std::cmp::Ordering::Less    => 1,
        std::cmp::Ordering::Greater => -1,
        std::cmp::Ordering::Equal   => 0,
    }
}

/// `1` if the target is east of `current`, `-1` if west, `0` if level.
#[inline]
pub fn horizontal_sense(current: Position, target: Position) -> i8 {
    match target.x.cmp(&current.x) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less    => -1,
        std::cmp::Ordering::Equal   => 0,
    }
}

/// Vertical axis status: `Positive` = go north, `Negative` = go south.
///
/// Returns `Blocked` when the target is level *or* the cell toward it is a
/// wall.  `probe` is called at most once and only when the target is off-axis.
pub fn vertical_status<P>(current: Position, target: Position, probe: P) -> AxisStatus
where
    P: FnOnce(Heading) -> CellProbe,
{
    match vertical_sense(current, target) {
        1  => open_or_blocked(probe(Heading::North), AxisStatus::Positive),
        -1 => open_or_blocked(probe(Heading::South), AxisStatus::Negative),
        _  => AxisStatus::Blocked,
    }
}

/// Horizontal axis status: `Positive` = go east, `Negative` = go west.
pub fn horizontal_status<P>(current: Position, target: Position, probe: P) -> AxisStatus
where
    P: FnOnce(Heading) -> CellProbe,
{
    match horizontal_sense(current, target) {
        1  => open_or_blocked(probe(Heading::East), AxisStatus::Positive),
        -1 => open_or_blocked(probe(Heading::West), AxisStatus::Negative),
        _  => AxisStatus::Blocked,
    }
}

/// Both axis statuses from the robot's live position, target, and walls.
pub fn axis_statuses<Rb: Robot + ?Sized>(robot: &Rb) -> (AxisStatus, AxisStatus) {
    let (current, target) = (robot.position(), robot.target());
    (
        vertical_status(current, target, |h| robot.probe(h)),
        horizontal_status(current, target, |h| robot.probe(h)),
    )
}

#[inline]
fn open_or_blocked(probe: CellProbe, go: AxisStatus) -> AxisStatus {
    if probe.is_wall() { AxisStatus::Blocked } else { go }
}
