use crate::pattern::document::PatternDocument;
use crate::pattern::hit::{hit_test, LedHit};
use crate::pattern::model::{arm_points, PatternConfig, StateGrid};
use crate::pattern::project::{screen_leds, ScreenLed};
use crate::pattern::view::ViewTransform;

/// Owns the authoritative editor state and interprets pointer gestures.
///
/// The canvas center is passed in per event because the drawing area moves
/// and resizes with the window; configuration, grid and view all live here.
#[derive(Debug, Clone)]
pub struct PatternEditor {
    config: PatternConfig,
    arm: Vec<[f32; 2]>,
    grid: StateGrid,
    view: ViewTransform,
    pressed: bool,
    last_toggle: Option<[f32; 2]>,
}

impl Default for PatternEditor {
    fn default() -> Self {
        let config = PatternConfig::default();
        Self {
            arm: arm_points(&config),
            grid: StateGrid::new(config.divisions, config.leds_per_arm),
            config,
            view: ViewTransform::default(),
            pressed: false,
            last_toggle: None,
        }
    }
}

impl PatternEditor {
    pub fn new(config: PatternConfig) -> anyhow::Result<Self> {
        let mut editor = Self::default();
        editor.reconfigure(config)?;
        Ok(editor)
    }

    pub fn config(&self) -> PatternConfig {
        self.config
    }

    pub fn grid(&self) -> &StateGrid {
        &self.grid
    }

    pub fn view(&self) -> ViewTransform {
        self.view
    }

    /// Apply new counts/offset. Destructive: the arm is regenerated and all
    /// toggle state resets. Nothing changes if the config is rejected.
    pub fn reconfigure(&mut self, config: PatternConfig) -> anyhow::Result<()> {
        config.validate()?;
        self.config = config;
        self.arm = arm_points(&config);
        self.grid.reset(config.divisions, config.leds_per_arm);
        self.last_toggle = None;
        Ok(())
    }

    /// Pointer button went down over the canvas: a drag gesture starts and
    /// its toggle de-duplication starts fresh.
    pub fn pointer_down(&mut self) {
        self.pressed = true;
        self.last_toggle = None;
    }

    /// Pointer button released, anywhere, not necessarily over the canvas.
    pub fn pointer_up(&mut self) {
        self.pressed = false;
        self.last_toggle = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Discrete click: toggle the first LED under the pointer, if any.
    /// Returns whether a cell changed.
    pub fn click(&mut self, pointer: [f32; 2], center: [f32; 2]) -> bool {
        match self.hit(pointer, center) {
            Some(hit) => {
                self.grid.toggle(hit.division, hit.index);
                true
            }
            None => false,
        }
    }

    /// Pointer moved while pressed. Toggles at most once per LED until the
    /// pointer reaches a different one, so a slow drag does not flicker the
    /// cell it is resting on.
    pub fn drag_to(&mut self, pointer: [f32; 2], center: [f32; 2]) -> bool {
        if !self.pressed {
            return false;
        }
        let Some(hit) = self.hit(pointer, center) else {
            return false;
        };
        if self.last_toggle == Some(hit.pos) {
            return false;
        }
        self.grid.toggle(hit.division, hit.index);
        self.last_toggle = Some(hit.pos);
        true
    }

    fn hit(&self, pointer: [f32; 2], center: [f32; 2]) -> Option<LedHit> {
        hit_test(pointer, &self.arm, self.config.divisions, self.view, center)
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    /// LEDs in paint order for the current frame.
    pub fn screen_leds(&self, center: [f32; 2]) -> Vec<ScreenLed> {
        screen_leds(&self.arm, &self.grid, self.view, center)
    }

    /// Snapshot the full editable state as an export document.
    pub fn export_document(&self) -> PatternDocument {
        PatternDocument::from_state(self.config, &self.grid)
    }

    /// Replace configuration and state wholesale from an imported document.
    /// Nothing changes if the document is rejected.
    pub fn apply_document(&mut self, document: PatternDocument) -> anyhow::Result<()> {
        let (config, grid) = document.into_state()?;
        self.arm = arm_points(&config);
        self.config = config;
        self.grid = grid;
        self.last_toggle = None;
        Ok(())
    }
}
