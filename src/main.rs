// What you SEE:
// • A white 1280×720 window with a black circle near the top-left.
// • Arrow keys slide the circle; it stops at the window edges.
// • E grows the circle, Q shrinks it. Close the window or press ESC to quit.

use std::process::ExitCode;

use circle_raster::app::{self, App};
use circle_raster::config::{HEIGHT, TITLE, WIDTH};
use circle_raster::draw::Drawer;
use circle_raster::error::Error;
use circle_raster::logging::init_logging;

fn main() -> ExitCode {
    init_logging();

    match start() {
        Ok(frames) => {
            log::info!("exited after {frames} frames");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn start() -> Result<u64, Error> {
    /* --- Window setup ---
       Visual: an empty window opens; nothing is drawn until the first present. */
    let mut drawer = Drawer::new(TITLE, WIDTH, HEIGHT)?;

    /* --- Frame + input state, dropped together with the window on any exit --- */
    let mut app = App::new(WIDTH, HEIGHT);

    app::run(&mut app, &mut drawer)
}
