use crate::pattern::model::LED_RADIUS;
use crate::pattern::project::{division_angle, rotate_about};
use crate::pattern::view::ViewTransform;

/// A successful hit: which cell was struck, and where its rotated anchor
/// lies in pattern space (used to de-duplicate toggles during a drag).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedHit {
    pub division: usize,
    pub index: usize,
    pub pos: [f32; 2],
}

/// Map a canvas-space pointer back to pattern space and scan for the first
/// LED whose circle contains it.
///
/// Divisions are scanned in ascending order, indices within a division
/// likewise, and the scan stops on the first match, so overlapping circles
/// always resolve to the lowest (division, index).
pub fn hit_test(
    pointer: [f32; 2],
    arm: &[[f32; 2]],
    divisions: usize,
    view: ViewTransform,
    center: [f32; 2],
) -> Option<LedHit> {
    if divisions == 0 || arm.is_empty() {
        return None;
    }
    let target = view.to_pattern(pointer, center);
    for division in 0..divisions {
        let angle = division_angle(division, divisions);
        for (index, &point) in arm.iter().enumerate() {
            let pos = rotate_about(point, [0.0, 0.0], angle);
            let dx = pos[0] - target[0];
            let dy = pos[1] - target[1];
            if dx * dx + dy * dy < LED_RADIUS * LED_RADIUS {
                return Some(LedHit {
                    division,
                    index,
                    pos,
                });
            }
        }
    }
    None
}
