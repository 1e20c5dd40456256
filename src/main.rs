use eframe::egui;
use sol_viz::app::App;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1600.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sol Viz",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)?))),
    )
}
