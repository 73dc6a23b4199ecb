//! Results of sensing the cells around the agent.

/// What a probe of an adjacent cell found.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellProbe {
    Wall,
    Open,
}

impl CellProbe {
    #[inline]
    pub fn is_open(self) -> bool {
        self == CellProbe::Open
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellProbe::Wall
    }
}

/// Classification of one axis (vertical or horizontal) relative to the target.
///
/// On the vertical axis `Positive` means "go north" and `Negative` means
/// "go south"; on the horizontal axis `Positive` is east and `Negative` west.
///
/// `Blocked` covers two situations at once: the target is level with the
/// agent on this axis, *or* the target is off-axis but the adjacent cell
/// toward it is a wall.  The heading decision table depends on the two being
/// indistinguishable, so no variant separates them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AxisStatus {
    Positive,
    Negative,
    Blocked,
}

impl AxisStatus {
    #[inline]
    pub fn is_blocked(self) -> bool {
        self == AxisStatus::Blocked
    }
}
