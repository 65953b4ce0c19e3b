// Window + software drawing utilities.
// Visual pieces provided here:
// 1) A window that shows the composed screen (desk + postcard + HUD).
// 2) Key and mouse polling helpers for the control panel and the brush.
// 3) A tiny 5x7 bitmap font for the HUD line and the instructions overlay.

use crate::error::Error;
use crate::surface::Surface;
use crate::types::BrushStyle;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let opts = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the composed screen to the window.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, screen: &Surface) -> Result<(), Error> {
        self.window
            .update_with_buffer(&screen.pixels, screen.width, screen.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current client-area size; this is the viewport the postcard is sized from.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Current mouse position in window pixel coordinates, or None when the
    /// pointer is outside the window entirely.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x as i32, y as i32))
    }

    /// Visual: while this is true, the active brush paints under the cursor.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Keys 1..5 pick a brush style (same order the style buttons had).
    pub fn style_key_pressed(&self) -> Option<BrushStyle> {
        let picks = [
            (Key::Key1, BrushStyle::Standard),
            (Key::Key2, BrushStyle::Impressionist),
            (Key::Key3, BrushStyle::Pointillist),
            (Key::Key4, BrushStyle::Expressionist),
            (Key::Key5, BrushStyle::Eraser),
        ];
        picks
            .into_iter()
            .find(|(key, _)| self.window.is_key_pressed(*key, KeyRepeat::No))
            .map(|(_, style)| style)
    }

    /// F1..F6 pick a palette entry.
    pub fn palette_key_pressed(&self) -> Option<usize> {
        [Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6]
            .into_iter()
            .position(|key| self.window.is_key_pressed(key, KeyRepeat::No))
    }

    /// '[' shrinks the brush, ']' grows it; repeats while held (slider stand-in).
    pub fn size_step_pressed(&self) -> i32 {
        let mut step = 0;
        if self.window.is_key_pressed(Key::LeftBracket, KeyRepeat::Yes) {
            step -= 1;
        }
        if self.window.is_key_pressed(Key::RightBracket, KeyRepeat::Yes) {
            step += 1;
        }
        step
    }

    /// Visual: when pressed, the postcard is wiped blank again.
    pub fn clear_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Visual: when pressed, my-postcard.png lands next to the executable.
    pub fn save_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software compositing: blit, rectangles, overlay ---------- */

/// Copy the postcard onto the screen with its top-left corner at (ox,oy).
/// Rows are clipped against the screen edges, so partial fits are safe.
pub fn blit(screen: &mut Surface, postcard: &Surface, ox: i32, oy: i32) {
    for y in 0..postcard.height as i32 {
        for x in 0..postcard.width as i32 {
            let px = postcard.pixels[y as usize * postcard.width + x as usize];
            screen.put_pixel(ox + x, oy + y, px);
        }
    }
}

/// Fill an axis-aligned rectangle (used for the HUD color swatch).
pub fn fill_rect(screen: &mut Surface, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for yy in y..y + h {
        for xx in x..x + w {
            screen.put_pixel(xx, yy, color);
        }
    }
}

/// Wash a rectangle toward `color` at the given opacity (plain sRGB lerp, the
/// same mixing a CSS opacity layer does).
/// Visual: the area looks frosted; whatever is underneath still shows through.
pub fn wash_rect(screen: &mut Surface, x: i32, y: i32, w: i32, h: i32, color: u32, alpha: f32) {
    let a = alpha.clamp(0.0, 1.0);
    let inv = 1.0 - a;
    let wr = ((color >> 16) & 0xFF) as f32;
    let wg = ((color >> 8) & 0xFF) as f32;
    let wb = (color & 0xFF) as f32;

    for yy in y..y + h {
        for xx in x..x + w {
            let Some(old) = screen.pixel(xx, yy) else { continue };
            let r = (a * wr + inv * ((old >> 16) & 0xFF) as f32).round() as u32;
            let g = (a * wg + inv * ((old >> 8) & 0xFF) as f32).round() as u32;
            let b = (a * wb + inv * (old & 0xFF) as f32).round() as u32;
            screen.put_pixel(xx, yy, (r << 16) | (g << 8) | b);
        }
    }
}

/* ---------- 5x7 bitmap font (A-Z, digits, punctuation for the HUD) ---------- */

/// Return a 5x7 glyph bitmap for the character set the HUD needs.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase A..Z
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation: space, vertical bar, colon, dot, brackets, dash, bang
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '[' => g!(0b01110,0b01000,0b01000,0b01000,0b01000,0b01000,0b01110),
        ']' => g!(0b01110,0b00010,0b00010,0b00010,0b00010,0b00010,0b01110),
        '-' => g!(0b00000,0b00000,0b00000,0b01110,0b00000,0b00000,0b00000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph appears with a 1-pixel dark shadow for contrast.
fn draw_char_5x7(screen: &mut Surface, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by (1,1) in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    screen.put_pixel(x + rx as i32 + 1, y + ry as i32 + 1, 0x00000000);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    screen.put_pixel(x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs (uppercased; the font has no lowercase).
pub fn draw_text_5x7(screen: &mut Surface, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        let ch = ch.to_ascii_uppercase();
        draw_char_5x7(screen, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

/// Pixel width of a string in this font, for centering.
pub fn text_width_5x7(text: &str) -> i32 {
    (text.chars().count() as i32 * 6 - 1).max(0)
}
