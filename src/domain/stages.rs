//! Stage identifiers
//!
//! Closed set of pipeline stages. The scheduler plans a tick as a list of
//! these and dispatches each through a `match`, so there is no name lookup.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StageId {
    /// one-time diagnostic pattern (first tick, opt-in)
    Seed = 0,
    Force = 1,
    BoundaryVelocity = 2,
    Advection = 3,
    Diffuse = 4,
    Divergence = 5,
    Clear = 6,
    Pressure = 7,
    BoundaryPressure = 8,
    Project = 9,
}

impl StageId {
    pub const COUNT: usize = 10;

    pub const ALL: [StageId; StageId::COUNT] = [
        StageId::Seed,
        StageId::Force,
        StageId::BoundaryVelocity,
        StageId::Advection,
        StageId::Diffuse,
        StageId::Divergence,
        StageId::Clear,
        StageId::Pressure,
        StageId::BoundaryPressure,
        StageId::Project,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            StageId::Seed => "seed",
            StageId::Force => "force",
            StageId::BoundaryVelocity => "boundary_velocity",
            StageId::Advection => "advection",
            StageId::Diffuse => "diffuse",
            StageId::Divergence => "divergence",
            StageId::Clear => "clear",
            StageId::Pressure => "pressure",
            StageId::BoundaryPressure => "boundary_pressure",
            StageId::Project => "project",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_indexed_in_order() {
        for (i, stage) in StageId::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = StageId::ALL.iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), StageId::COUNT);
    }
}
