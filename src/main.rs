use eframe::egui;
use led_orbit::gui::PatternApp;

fn main() -> anyhow::Result<()> {
    led_orbit::logging::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LED Orbit",
        native_options,
        Box::new(|_cc| Box::new(PatternApp::new())),
    )
    .map_err(|err| anyhow::anyhow!("failed to run UI: {err}"))
}
