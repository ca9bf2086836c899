use anyhow::{Error, bail};
use bevy_math::Vec2;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6, PI, TAU};

use crate::protocol::{CuboidPlacement, PointPlacement};

// Unit hexagon corners, pointy along +y, counter-clockwise from 90 degrees.
const HEX_CORNERS: [Vec2; 6] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(-0.866_025_4, 0.5),
    Vec2::new(-0.866_025_4, -0.5),
    Vec2::new(0.0, -1.0),
    Vec2::new(0.866_025_4, -0.5),
    Vec2::new(0.866_025_4, 0.5),
];

// ============================================================================
// Shapes
// ============================================================================

// Oriented rectangle footprint of a wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectShape {
    pub half_length: f32, // along the local x axis
    pub half_width: f32,
    pub pose: CuboidPlacement,
}

// Hexagonal footprint of a pillar or of the player probe. Hexes never rotate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexShape {
    pub width: f32, // circumradius
    pub pose: PointPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvexShape {
    Rect(RectShape),
    Hex(HexShape),
}

impl RectShape {
    #[must_use]
    pub const fn new(half_length: f32, half_width: f32, pose: CuboidPlacement) -> Self {
        Self {
            half_length,
            half_width,
            pose,
        }
    }

    // Farthest corner along `direction` (radians). The direction is measured in world space, the
    // quadrant is picked in the rectangle's local frame.
    #[must_use]
    pub fn support(&self, direction: f32) -> Vec2 {
        let local_angle = (direction - self.pose.rotation).rem_euclid(TAU);
        let (hl, hw) = (self.half_length, self.half_width);

        let corner = if local_angle < FRAC_PI_2 {
            Vec2::new(hl, hw)
        } else if local_angle < PI {
            Vec2::new(-hl, hw)
        } else if local_angle < 3.0 * FRAC_PI_2 {
            Vec2::new(-hl, -hw)
        } else {
            Vec2::new(hl, -hw)
        };

        Vec2::from_angle(self.pose.rotation).rotate(corner) + self.pose.translation
    }
}

impl HexShape {
    #[must_use]
    pub const fn new(width: f32, translation: Vec2) -> Self {
        Self {
            width,
            pose: PointPlacement { translation },
        }
    }

    #[must_use]
    pub const fn center(&self) -> Vec2 {
        self.pose.translation
    }

    // Corner nearest to `direction`. Corner k sits at 90 + 60k degrees and supports every direction
    // within 30 degrees of it.
    #[must_use]
    pub fn support(&self, direction: f32) -> Vec2 {
        let offset = (direction - FRAC_PI_2 + FRAC_PI_6).rem_euclid(TAU);
        let sector = ((offset / FRAC_PI_3) as usize).min(5);
        HEX_CORNERS[sector] * self.width + self.pose.translation
    }
}

impl ConvexShape {
    #[must_use]
    pub fn support(&self, direction: f32) -> Vec2 {
        match self {
            Self::Rect(rect) => rect.support(direction),
            Self::Hex(hex) => hex.support(direction),
        }
    }
}

impl From<RectShape> for ConvexShape {
    fn from(rect: RectShape) -> Self {
        Self::Rect(rect)
    }
}

impl From<HexShape> for ConvexShape {
    fn from(hex: HexShape) -> Self {
        Self::Hex(hex)
    }
}

// Only hexes can act as probes; a rectangle probe is a caller bug and is refused here.
impl TryFrom<ConvexShape> for HexShape {
    type Error = Error;

    fn try_from(shape: ConvexShape) -> Result<Self, Self::Error> {
        match shape {
            ConvexShape::Hex(hex) => Ok(hex),
            ConvexShape::Rect(rect) => bail!("rectangle at {} cannot be used as a probe", rect.pose.translation),
        }
    }
}
