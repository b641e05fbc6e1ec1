use eframe::egui;

mod app;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 840.0])
            .with_min_inner_size([420.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Meridian Studio",
        options,
        Box::new(|cc| Ok(Box::new(app::SiteApp::new(cc)))),
    )
    .expect("Failed to start Meridian kiosk");
}
