use learnscape::LearnscapeApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "LearnscapeAI",
        options,
        Box::new(|_cc| Ok(Box::new(LearnscapeApp::new()))),
    )
}

// Web entry point: attaches the app to the canvas of the hosting page.
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let canvas = document
            .get_element_by_id("learnscape_canvas")
            .expect("no element with id learnscape_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("learnscape_canvas is not a canvas");

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(LearnscapeApp::new()))),
            )
            .await;

        if let Err(err) = result {
            log::error!("failed to start the app: {err:?}");
        }
    });
}
