// The postcard surface: the one mutable pixel buffer everything draws into.
// Visual: this is the white rectangle you paint on; the window shows it centered
// over a desk-colored margin.

/// The postcard never grows beyond a classic 800x600, whatever the window does.
pub const MAX_WIDTH: usize = 800;
pub const MAX_HEIGHT: usize = 600;

pub struct Surface {
    pub width: usize,     // postcard width in pixels
    pub height: usize,    // postcard height in pixels
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB, same layout minifb wants
    pub background: u32,  // the blank-postcard fill color
}

impl Surface {
    /// Create a surface sized to the viewport: min(90% width, 800) wide by
    /// min(70% height, 600) tall, filled with the background color.
    /// Visual: a fresh blank postcard appears.
    pub fn initialize(viewport_w: usize, viewport_h: usize, background: u32) -> Self {
        let (width, height) = fit_to_viewport(viewport_w, viewport_h);
        Surface {
            width,
            height,
            pixels: vec![background; width * height],
            background,
        }
    }

    /// A buffer with exact dimensions, no sizing rule applied. The main loop uses
    /// this for the window-sized screen the postcard is composed onto.
    pub fn with_size(width: usize, height: usize, background: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Surface {
            width,
            height,
            pixels: vec![background; width * height],
            background,
        }
    }

    /// Re-fill every pixel with the background color.
    /// Visual: the whole drawing disappears; the postcard is blank again.
    pub fn clear(&mut self) {
        for px in &mut self.pixels {
            *px = self.background;
        }
    }

    /// Re-run initialization against a new viewport. Whatever was drawn is lost;
    /// that is the accepted behavior, not a bug.
    pub fn resize(&mut self, viewport_w: usize, viewport_h: usize) {
        *self = Surface::initialize(viewport_w, viewport_h, self.background);
    }

    /// Put one pixel if (x,y) is inside the postcard; silently skip otherwise.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = color;
    }

    /// Read one pixel, or None when (x,y) falls outside the postcard.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// True when (x,y) lands on the postcard. The input translator uses this to
    /// decide whether a press starts a stroke.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

/// The sizing rule: 90% of the viewport width capped at 800, 70% of the viewport
/// height capped at 600, never smaller than one pixel either way.
fn fit_to_viewport(viewport_w: usize, viewport_h: usize) -> (usize, usize) {
    let w = ((viewport_w as f32 * 0.9) as usize).min(MAX_WIDTH).max(1);
    let h = ((viewport_h as f32 * 0.7) as usize).min(MAX_HEIGHT).max(1);
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0x00FFFFFF;

    #[test]
    fn sizing_follows_the_viewport_rule() {
        // Small viewport: fractions apply
        let s = Surface::initialize(500, 400, WHITE);
        assert_eq!((s.width, s.height), (450, 280));

        // Large viewport: caps apply
        let s = Surface::initialize(2000, 1500, WHITE);
        assert_eq!((s.width, s.height), (800, 600));
    }

    #[test]
    fn starts_fully_background() {
        let s = Surface::initialize(500, 400, WHITE);
        assert!(s.pixels.iter().all(|&px| px == WHITE));
    }

    #[test]
    fn clear_restores_a_blank_postcard() {
        let mut s = Surface::initialize(500, 400, WHITE);
        s.put_pixel(10, 10, 0x002563EB);
        s.clear();
        assert!(s.pixels.iter().all(|&px| px == WHITE));
    }

    #[test]
    fn resize_discards_the_drawing_and_resizes() {
        let mut s = Surface::initialize(500, 400, WHITE);
        s.put_pixel(10, 10, 0x002563EB);
        s.resize(1000, 1000);
        assert_eq!((s.width, s.height), (800, 600)); // 900 capped at 800, 700 at 600
        assert!(s.pixels.iter().all(|&px| px == WHITE));
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut s = Surface::initialize(100, 100, WHITE);
        s.put_pixel(-1, 5, 0);
        s.put_pixel(5, -1, 0);
        s.put_pixel(s.width as i32, 5, 0);
        s.put_pixel(5, s.height as i32, 0);
        assert!(s.pixels.iter().all(|&px| px == WHITE));
        assert_eq!(s.pixel(-1, 0), None);
    }
}
