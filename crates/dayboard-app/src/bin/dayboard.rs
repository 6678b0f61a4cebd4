//! Runs the board in a native window, or on a page canvas in the browser.

use dayboard_app::DayboardApp;

const TITLE: &str = "Dayboard";

fn app_creator() -> eframe::AppCreator<'static> {
    Box::new(|cc| Ok(Box::new(DayboardApp::new(cc))))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("{TITLE} {}", dayboard_app::version::build_version());

    // Wide enough for the timer panel next to the board at scale 1.
    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(TITLE)
        .with_app_id("dayboard")
        .with_drag_and_drop(true)
        .with_inner_size((1064.0, 760.0))
        .with_min_inner_size((360.0, 400.0));
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(TITLE, options, app_creator())
}

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "the_canvas_id";

#[cfg(target_arch = "wasm32")]
const LOADING_ID: &str = "loading_text";

#[cfg(target_arch = "wasm32")]
fn main() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        previous(info);
        let message = info.to_string();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "{TITLE} stopped unexpectedly.\n\n{message}\n\n\
                 Reload the page to continue. Tasks and the memo stay saved in this browser."
            ));
        }
    }));

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    log::info!("{TITLE} {} (web)", dayboard_app::version::build_version());

    wasm_bindgen_futures::spawn_local(async {
        let loading = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(LOADING_ID));
        match start().await {
            Ok(()) => {
                if let Some(loading) = loading {
                    loading.remove();
                }
            }
            Err(err) => {
                log::error!("failed to start {TITLE}: {err:?}");
                if let Some(loading) = loading {
                    loading.set_inner_html(
                        "<p>Dayboard could not start. See the developer console for details.</p>",
                    );
                }
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast as _, JsValue};

    let canvas = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CANVAS_ID))
        .ok_or_else(|| JsValue::from_str("canvas element is missing"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    eframe::WebRunner::new()
        .start(canvas, eframe::WebOptions::default(), app_creator())
        .await
}
