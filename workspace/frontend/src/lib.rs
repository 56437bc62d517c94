mod components;
pub mod page;
pub mod scroll;
pub mod settings;
pub mod theme;

pub use components::showcase::{FeatureCard, FeatureCardProps};
pub use page::{Page, PageProps};
#[cfg(feature = "ssr")]
pub use page::render_to_string;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Portfolio starting ===");
    log::debug!("Application settings: {:?}", settings);

    yew::Renderer::<Page>::new().render();
    log::info!("Page mounted");
}
