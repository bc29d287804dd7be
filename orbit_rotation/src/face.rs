// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Rotation;

/// A face of the orbit cube, used as a "snap to face" shortcut target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// Facing the viewer at rest.
    Front,
    /// Opposite the front face.
    Back,
    /// Faces the viewer at a turn of 90 degrees.
    Left,
    /// Faces the viewer at a turn of 270 degrees.
    Right,
    /// Faces the viewer at the lowest tilt.
    Top,
    /// Never faces the viewer; the tilt range stops at the top face.
    Bottom,
}

impl CubeFace {
    /// Every face, in display order.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Right,
        Self::Left,
        Self::Top,
        Self::Bottom,
    ];

    /// Rotation that brings this face to the viewer, if it can be reached.
    #[must_use]
    pub fn target(self) -> Option<Rotation> {
        match self {
            Self::Front => Some(Rotation::new(0.0, 0.0)),
            Self::Back => Some(Rotation::new(0.0, 180.0)),
            Self::Left => Some(Rotation::new(0.0, 90.0)),
            Self::Right => Some(Rotation::new(0.0, 270.0)),
            Self::Top => Some(Rotation::new(-90.0, 0.0)),
            Self::Bottom => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_is_normalized() {
        for face in CubeFace::ALL {
            if let Some(target) = face.target() {
                assert_eq!(target.clamped(), target, "{face:?}");
            }
        }
    }

    #[test]
    fn only_bottom_is_unreachable() {
        let unreachable: Vec<_> = CubeFace::ALL
            .into_iter()
            .filter(|face| face.target().is_none())
            .collect();
        assert_eq!(unreachable, vec![CubeFace::Bottom]);
    }
}
