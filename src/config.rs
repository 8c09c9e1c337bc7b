// Hard-coded knobs for the demo. Nothing here is read at runtime.

pub const TITLE: &str = "Game";
pub const WIDTH: usize = 1280;
pub const HEIGHT: usize = 720;

/// Where the circle starts and how big it is.
pub const START_X: i32 = 100;
pub const START_Y: i32 = 100;
pub const START_RADIUS: i32 = 50;

/// How much one press of E / Q changes the radius.
pub const RADIUS_STEP: i32 = 1;

// 0xAARRGGBB; minifb ignores the alpha byte.
pub const BACKGROUND: u32 = 0x00_FF_FF_FF;
pub const CIRCLE_COLOR: u32 = 0x00_00_00_00;
