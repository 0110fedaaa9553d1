use crate::pattern::document::PatternDocument;
use crate::pattern::input::PatternEditor;
use crate::pattern::model::PatternConfig;
use eframe::egui::{self, Color32, Sense};

const LIT_COLOR: Color32 = Color32::from_rgb(0, 191, 255);
const UNLIT_COLOR: Color32 = Color32::WHITE;

/// Single-window editor: controls and export area on the left, the LED
/// canvas filling the rest.
pub struct PatternApp {
    editor: PatternEditor,
    led_input: usize,
    division_input: usize,
    offset_input: f32,
    export_text: String,
    error: Option<String>,
}

impl Default for PatternApp {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternApp {
    pub fn new() -> Self {
        let editor = PatternEditor::default();
        let config = editor.config();
        Self {
            editor,
            led_input: config.leds_per_arm,
            division_input: config.divisions,
            offset_input: config.arm_offset,
            export_text: String::new(),
            error: None,
        }
    }

    fn pending_config(&self) -> PatternConfig {
        PatternConfig {
            leds_per_arm: self.led_input,
            divisions: self.division_input,
            arm_offset: self.offset_input,
        }
    }

    fn apply_config(&mut self) {
        match self.editor.reconfigure(self.pending_config()) {
            Ok(()) => self.error = None,
            Err(err) => self.error = Some(format!("Invalid configuration: {err}")),
        }
    }

    fn export(&mut self) {
        match self.editor.export_document().to_pretty_json() {
            Ok(json) => {
                self.export_text = json;
                self.error = None;
            }
            Err(err) => self.error = Some(format!("Export failed: {err}")),
        }
    }

    fn import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        match PatternDocument::load(&path).and_then(|doc| self.editor.apply_document(doc)) {
            Ok(()) => {
                let config = self.editor.config();
                self.led_input = config.leds_per_arm;
                self.division_input = config.divisions;
                self.offset_input = config.arm_offset;
                self.error = None;
                tracing::info!(path = %path.display(), "imported pattern document");
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "import failed: {err:#}");
                self.error = Some(format!("Import failed: {err}"));
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Radial LED pattern");
        if let Some(err) = &self.error {
            ui.colored_label(Color32::RED, err);
        }

        egui::Grid::new("pattern_inputs").num_columns(2).show(ui, |ui| {
            ui.label("LEDs per arm");
            ui.add(egui::DragValue::new(&mut self.led_input).clamp_range(0..=256));
            ui.end_row();

            ui.label("Divisions");
            ui.add(egui::DragValue::new(&mut self.division_input).clamp_range(1..=720));
            ui.end_row();

            ui.label("Arm offset");
            ui.add(egui::DragValue::new(&mut self.offset_input).clamp_range(0.0..=1000.0));
            ui.end_row();
        });

        ui.horizontal(|ui| {
            if ui.button("Apply").clicked() {
                self.apply_config();
            }
            if ui.button("Zoom in").clicked() {
                self.editor.zoom_in();
            }
            if ui.button("Zoom out").clicked() {
                self.editor.zoom_out();
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Export").clicked() {
                self.export();
            }
            if ui.button("Import…").clicked() {
                self.import();
            }
        });

        egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut self.export_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_rows(12)
                    .desired_width(f32::INFINITY)
                    .hint_text("Export writes the pattern JSON here"),
            );
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
        let center = [rect.center().x, rect.center().y];

        if response.drag_started() {
            self.editor.pointer_down();
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.editor.drag_to([pos.x, pos.y], center);
            }
        }
        if response.drag_stopped() {
            self.editor.pointer_up();
        }
        // The release can land outside the canvas, or outside the window.
        if self.editor.is_pressed() && !ctx.input(|i| i.pointer.any_down()) {
            self.editor.pointer_up();
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.editor.click([pos.x, pos.y], center);
            }
        }
        if response.hovered() {
            let scroll = ctx.input(|i| i.raw_scroll_delta.y);
            if scroll > f32::EPSILON {
                self.editor.zoom_in();
            } else if scroll < -f32::EPSILON {
                self.editor.zoom_out();
            }
        }

        for led in self.editor.screen_leds(center) {
            painter.circle_filled(
                egui::Pos2::new(led.pos[0], led.pos[1]),
                led.radius,
                if led.lit { LIT_COLOR } else { UNLIT_COLOR },
            );
        }
    }
}

impl eframe::App for PatternApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .default_width(300.0)
            .show(ctx, |ui| self.controls(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui, ctx));
    }
}
