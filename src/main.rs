//! Reversi GUI
//!
//! A graphical interface for playing Reversi against the AI or another player.
//! Set `RUST_LOG` (e.g. `RUST_LOG=reversi=debug`) to see engine decisions.

use reversi::ui::ReversiApp;
use reversi::GameSettings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reversi=info")),
        )
        .init();

    let settings_path = GameSettings::default_path();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Reversi"),
        ..Default::default()
    };

    eframe::run_native(
        "Reversi",
        options,
        Box::new(|cc| Ok(Box::new(ReversiApp::new(cc, settings_path)))),
    )
}
