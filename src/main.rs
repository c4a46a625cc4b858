use eframe::{NativeOptions, Result, run_native};
use eframe::egui::{Vec2, ViewportBuilder};
use monogram_tshirt::app::App;
use monogram_tshirt::constants::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let title = "Monogram T-Shirt";

    let width = GUI_SIDEBAR_WIDTH + GUI_PREVIEW_SIZE + GUI_PREVIEW_PADDING * 2.0;
    let height = GUI_PREVIEW_SIZE + GUI_PREVIEW_PADDING * 2.0;

    let options = NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(Vec2::new(width, height)),
            resizable: Some(false),
            maximize_button: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };

    run_native(
        title,
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::<App>::default())
        }),
    )
}
