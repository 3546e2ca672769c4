use beatpass_console::components::App;
use beatpass_console::config::CONFIG;

fn main() {
    beatpass_console::init_logging();
    log::info!("🚀 BeatPass console starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
