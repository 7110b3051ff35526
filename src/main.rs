//! UU Game GUI
//!
//! Play the stacking game against another person or the AI.

use uu_game::ui::UuGameApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("UU Game"),
        ..Default::default()
    };

    eframe::run_native(
        "UU Game",
        options,
        Box::new(|cc| Ok(Box::new(UuGameApp::new(cc)))),
    )
}
