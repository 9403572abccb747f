//! Top-down RGBA buffer for debug renders.

/// Row-major RGBA pixels, four bytes per pixel.
#[derive(Clone, Debug)]
pub struct DebugImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// Transparent image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let at = self.offset(x, y);
        self.pixels[at..at + 4].copy_from_slice(&rgba);
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let at = self.offset(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[at..at + 4]);
        rgba
    }

    /// Paints the `scale x scale` block for grid cell `(cell_x, cell_y)`,
    /// clipped to the image.
    pub fn fill_cell(&mut self, cell_x: u32, cell_y: u32, scale: u32, rgba: [u8; 4]) {
        let xs = cell_x * scale..((cell_x + 1) * scale).min(self.width);
        for py in cell_y * scale..((cell_y + 1) * scale).min(self.height) {
            for px in xs.clone() {
                self.set_pixel(px, py, rgba);
            }
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
