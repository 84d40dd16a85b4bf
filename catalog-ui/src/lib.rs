#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod catalog;
pub mod config;
pub mod http_client;
pub mod ui;
pub mod wasm_utils;

/// WASM entry point for the catalog UI
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str, base_api: Option<String>) -> Result<(), wasm_bindgen::JsValue> {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let mut config = config::CatalogConfig::default();
    config.apply_overrides(|key| match key {
        config::BASE_API_ENV => base_api.clone(),
        _ => None,
    });

    let web_options = eframe::WebOptions::default();
    let canvas_id = canvas_id.to_string();

    wasm_utils::spawn_async(async move {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&canvas_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas element '{}' not found", canvas_id);
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    cc.egui_ctx.set_visuals(egui::Visuals::dark());
                    Ok(Box::new(app::CatalogApp::new(cc, config)))
                }),
            )
            .await;

        if let Some(loading_text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("loading_text"))
        {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    log::error!("Failed to start eframe: {:?}", e);
                }
            }
        }
    });

    Ok(())
}
