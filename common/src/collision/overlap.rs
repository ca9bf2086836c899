use bevy_math::Vec2;

use super::shapes::{ConvexShape, HexShape, RectShape};

// ============================================================================
// Static Overlap Tests
// ============================================================================

// Does `probe` overlap the static `obstacle`? Boundaries touch inclusively.
#[must_use]
pub fn collides(obstacle: &ConvexShape, probe: &HexShape) -> bool {
    match obstacle {
        ConvexShape::Hex(hex) => overlap_hex_vs_hex(hex, probe),
        ConvexShape::Rect(rect) => overlap_rect_vs_hex(rect, probe),
    }
}

// Both hexes are treated as their circumscribed circles.
#[must_use]
pub fn overlap_hex_vs_hex(obstacle: &HexShape, probe: &HexShape) -> bool {
    let reach = obstacle.width + probe.width;
    obstacle.center().distance_squared(probe.center()) <= reach * reach
}

// Oriented rectangle against the probe's circumscribed circle. The circle center is moved into the
// rectangle's frame, after which the axis-aligned closed form applies.
#[must_use]
pub fn overlap_rect_vs_hex(rect: &RectShape, probe: &HexShape) -> bool {
    let relative = probe.center() - rect.pose.translation;
    let local = Vec2::from_angle(-rect.pose.rotation).rotate(relative);
    let distance = local.abs();

    let radius = probe.width;
    let (half_x, half_z) = (rect.half_length, rect.half_width);

    if distance.x > half_x + radius || distance.y > half_z + radius {
        return false;
    }

    if distance.x <= half_x || distance.y <= half_z {
        return true;
    }

    let corner = Vec2::new(distance.x - half_x, distance.y - half_z);
    corner.length_squared() <= radius * radius
}
