/// Factor applied per zoom step.
pub const ZOOM_STEP: f32 = 1.1;

/// Uniform scale about the canvas center.
///
/// Pattern space keeps the rotation center at the origin; the canvas center
/// is supplied per frame so the view follows window resizes. Zoom is
/// deliberately unclamped in both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl ViewTransform {
    pub fn zoom_in(&mut self) {
        self.scale *= ZOOM_STEP;
    }

    pub fn zoom_out(&mut self) {
        self.scale /= ZOOM_STEP;
    }

    pub fn to_canvas(&self, point: [f32; 2], center: [f32; 2]) -> [f32; 2] {
        [
            point[0] * self.scale + center[0],
            point[1] * self.scale + center[1],
        ]
    }

    pub fn to_pattern(&self, point: [f32; 2], center: [f32; 2]) -> [f32; 2] {
        [
            (point[0] - center[0]) / self.scale,
            (point[1] - center[1]) / self.scale,
        ]
    }
}
