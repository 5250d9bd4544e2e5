//! Point Defense entry point
//!
//! Initializes logging, loads settings and runs the game loop.

use point_defense::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    if let Err(err) = point_defense::app::run(settings) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
