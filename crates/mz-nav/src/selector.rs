//! The homing agent's heading decision table.

use rand::Rng;

use mz_core::{AxisStatus, CellProbe, Heading};
use mz_host::Robot;

use crate::evaluator::axis_statuses;
use crate::walker::pick_open_heading;

/// Combine the two axis statuses into the next heading.
///
/// | # | vertical          | horizontal        | heading                    |
/// |---|-------------------|-------------------|----------------------------|
/// | 1 | `Blocked`         | `Positive`        | East                       |
/// | 2 | `Blocked`         | `Negative`        | West                       |
/// | 3 | `Positive`        | `Blocked`         | North                      |
/// | 4 | `Negative`        | `Blocked`         | South                      |
/// | 5 | `Blocked`         | `Blocked`         | random open heading        |
/// | 6 | open              | open              | coin flip: vertical or horizontal |
///
/// Rule 6 is a fair coin whatever the remaining distance on each axis.
/// `probe` is only consulted by rule 5.
pub fn determine_heading<P, R>(
    vertical:   AxisStatus,
    horizontal: AxisStatus,
    probe:      P,
    rng:        &mut R,
) -> Heading
where
    P: Fn(Heading) -> CellProbe,
    R: Rng + ?Sized,
{
    use AxisStatus::{Blocked, Negative, Positive};

    match (vertical, horizontal) {
        (Blocked, Positive) => Heading::East,
        (Blocked, Negative) => Heading::West,
        (Positive, Blocked) => Heading::North,
        (Negative, Blocked) => Heading::South,
        (Blocked, Blocked)  => pick_open_heading(probe, rng),
        (v @ (Positive | Negative), h @ (Positive | Negative)) => {
            if rng.gen_bool(0.5) {
                toward(v, Heading::North, Heading::South)
            } else {
                toward(h, Heading::East, Heading::West)
            }
        }
    }
}

/// Evaluate both axes from the robot's live state and pick the next heading.
pub fn next_heading<Rb, R>(robot: &Rb, rng: &mut R) -> Heading
where
    Rb: Robot + ?Sized,
    R:  Rng + ?Sized,
{
    let (vertical, horizontal) = axis_statuses(robot);
    determine_heading(vertical, horizontal, |h| robot.probe(h), rng)
}

#[inline]
fn toward(status: AxisStatus, positive: Heading, negative: Heading) -> Heading {
    if status == AxisStatus::Positive { positive } else { negative }
}
