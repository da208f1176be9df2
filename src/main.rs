mod app;
mod classify;
mod error;
mod model;
mod monitor;
mod ui;

use std::thread;
use std::time::{Duration, Instant};

use app::App;
use error::Result;
use log::info;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    env_logger::init();

    let mut app = App::open();
    info!("panel up, polling every {}s", POLL_INTERVAL.as_secs());

    // Populate the slots right away instead of showing a blank panel for
    // the first interval.
    app.tick()?;

    let mut last_tick = Instant::now();
    loop {
        thread::sleep((last_tick + POLL_INTERVAL).saturating_duration_since(Instant::now()));
        app.tick()?;
        last_tick = Instant::now();
    }
}
