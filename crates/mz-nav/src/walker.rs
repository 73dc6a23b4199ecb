//! Open-heading search by uniform resampling.
//!
//! Both searches draw one of four directions uniformly, probe it, and retry
//! until the probe comes back open.  A cell with no open neighbour makes
//! them loop forever; a connected maze with a reachable target never puts
//! the agent in one.

use rand::Rng;

use mz_core::{CellProbe, Heading, RelativeDirection};

/// Uniformly random absolute heading whose adjacent cell is open.
pub fn pick_open_heading<P, R>(probe: P, rng: &mut R) -> Heading
where
    P: Fn(Heading) -> CellProbe,
    R: Rng + ?Sized,
{
    loop {
        let heading = Heading::ALL[rng.gen_range(0..Heading::ALL.len())];
        if probe(heading).is_open() {
            return heading;
        }
    }
}

/// Uniformly random direction relative to `facing` whose adjacent cell is
/// open.  Returns the relative choice and the absolute heading it maps to.
pub fn pick_open_relative<P, R>(facing: Heading, probe: P, rng: &mut R) -> (RelativeDirection, Heading)
where
    P: Fn(Heading) -> CellProbe,
    R: Rng + ?Sized,
{
    loop {
        let relative = RelativeDirection::ALL[rng.gen_range(0..RelativeDirection::ALL.len())];
        let heading = facing.turn(relative);
        if probe(heading).is_open() {
            return (relative, heading);
        }
    }
}
