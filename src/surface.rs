//! Drawing surface abstraction.

/// Trait for abstracting the monochrome display.
///
/// Implement this for your display driver (I2C/SPI framebuffer, simulator,
/// terminal, etc.). All drawing uses the foreground color; `clear` resets
/// the whole frame to background. Coordinates are pixels with the origin in
/// the top-left corner. Handle any hardware errors internally - these
/// methods cannot fail.
///
/// Renderers issue a full, idempotent redraw every frame: `clear`, a batch
/// of primitives, then `present` to push the frame to the panel.
pub trait DrawSurface {
    /// Resets the whole frame to the background color.
    fn clear(&mut self);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Draws a horizontal line of the given width.
    fn hline(&mut self, x: i32, y: i32, width: u32);

    /// Draws a vertical line of the given height.
    fn vline(&mut self, x: i32, y: i32, height: u32);

    /// Draws a text string with its top-left corner at the given position.
    fn text(&mut self, x: i32, y: i32, text: &str);

    /// Pushes the completed frame to the panel.
    fn present(&mut self);
}
