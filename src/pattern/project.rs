use crate::pattern::model::{StateGrid, LED_RADIUS};
use crate::pattern::view::ViewTransform;
use std::f32::consts::TAU;

/// One LED after rotation for a specific division, still in pattern space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLed {
    pub division: usize,
    pub index: usize,
    pub pos: [f32; 2],
    pub lit: bool,
}

/// One LED mapped to canvas space, ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLed {
    pub pos: [f32; 2],
    pub radius: f32,
    pub lit: bool,
}

/// Rotation angle of a division. Computed fresh from the division index so
/// repeated renders never accumulate floating point drift.
pub fn division_angle(division: usize, divisions: usize) -> f32 {
    division as f32 * (TAU / divisions as f32)
}

/// Rotate `point` about `center` by `angle`, counter-clockwise in the
/// y-down screen coordinate convention.
pub fn rotate_about(point: [f32; 2], center: [f32; 2], angle: f32) -> [f32; 2] {
    let (sin, cos) = angle.sin_cos();
    let dx = point[0] - center[0];
    let dy = point[1] - center[1];
    [
        dx * cos - dy * sin + center[0],
        dx * sin + dy * cos + center[1],
    ]
}

/// Replicate the arm around the origin, division-major then index order,
/// the same order the hit tester scans and the painter consumes.
pub fn placed_leds(arm: &[[f32; 2]], grid: &StateGrid) -> Vec<PlacedLed> {
    let divisions = grid.divisions();
    let mut leds = Vec::with_capacity(divisions * arm.len());
    for division in 0..divisions {
        let angle = division_angle(division, divisions);
        for (index, &point) in arm.iter().enumerate() {
            leds.push(PlacedLed {
                division,
                index,
                pos: rotate_about(point, [0.0, 0.0], angle),
                lit: grid.get(division, index),
            });
        }
    }
    leds
}

/// Map every placed LED through the view transform for painting. The drawn
/// radius scales with the zoom, matching what the hit tester sees after its
/// inverse transform.
pub fn screen_leds(
    arm: &[[f32; 2]],
    grid: &StateGrid,
    view: ViewTransform,
    center: [f32; 2],
) -> Vec<ScreenLed> {
    placed_leds(arm, grid)
        .into_iter()
        .map(|led| ScreenLed {
            pos: view.to_canvas(led.pos, center),
            radius: LED_RADIUS * view.scale,
            lit: led.lit,
        })
        .collect()
}
