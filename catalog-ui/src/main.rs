// Desktop entry point for the catalog UI
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use catalog_ui::app::CatalogApp;
    use catalog_ui::config::CatalogConfig;

    env_logger::init();

    let config = CatalogConfig::load()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title(config.window.title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        "Product Catalog",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(CatalogApp::new(cc, config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run catalog window: {}", e))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
