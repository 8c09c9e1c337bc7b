// Core types shared by the drawing code and the frame loop.

/// The offscreen frame we draw into and push to the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,     // pixels per row
    pub height: usize,    // number of rows
    pub pixels: Vec<u32>, // each entry is 0xAARRGGBB, row-major
}

impl FrameBuffer {
    /// Allocate a `width × height` buffer with every cell set to `color`.
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Overwrite the whole frame.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Write one cell. The caller has already clipped `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        debug_assert!(x < self.width && y < self.height, "pixel ({x},{y}) out of bounds");
        self.pixels[y * self.width + x] = color;
    }

    /// Write `count` cells of `row` starting at `start_x`.
    /// The caller has already clipped the span to the row.
    #[inline]
    pub fn fill_row_span(&mut self, row: usize, start_x: usize, count: usize, color: u32) {
        debug_assert!(row < self.height, "row {row} out of bounds");
        debug_assert!(start_x + count <= self.width, "span {start_x}+{count} past row end");
        let begin = row * self.width + start_x;
        self.pixels[begin..begin + count].fill(color);
    }

    /// Bounds-checked read.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}
