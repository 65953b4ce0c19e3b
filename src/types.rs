// Core types shared by the surface, the brush, and the controls.

/// The five brush rules the renderer can dispatch on.
/// Visual: each one leaves a recognizably different mark on the postcard.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BrushStyle {
    Standard,      // plain solid stroke
    Impressionist, // short choppy half-transparent strokes
    Pointillist,   // dots only
    Expressionist, // thick strokes with a nervous wobble
    Eraser,        // paints the background color back in
}

impl BrushStyle {
    /// Short label for the HUD line.
    pub fn label(self) -> &'static str {
        match self {
            BrushStyle::Standard => "STANDARD",
            BrushStyle::Impressionist => "IMPRESSIONIST",
            BrushStyle::Pointillist => "POINTILLIST",
            BrushStyle::Expressionist => "EXPRESSIONIST",
            BrushStyle::Eraser => "ERASER",
        }
    }
}

/// Everything the stroke renderer needs to know about the current brush.
/// Mutated by the control panel, read per gesture by the renderer.
#[derive(Clone, Copy, Debug)]
pub struct BrushConfig {
    pub color: u32,        // packed 0x00RRGGBB, same layout minifb wants
    pub size: u32,         // stroke size in pixels, kept within 1..=50
    pub style: BrushStyle, // active rendering rule
}

/// One translated pointer event, in surface-local pixel coordinates.
/// Visual: Start begins a stroke, Continue extends it, Stop lifts the brush.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Gesture {
    Start { x: i32, y: i32 },
    Continue { from: (i32, i32), to: (i32, i32) },
    Stop,
}

/// Parse a "#RRGGBB" hex string into a packed 0x00RRGGBB pixel.
/// Returns None for anything that isn't exactly that shape.
pub fn parse_hex_color(s: &str) -> Option<u32> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_hex() {
        assert_eq!(parse_hex_color("#2563eb"), Some(0x002563EB));
        assert_eq!(parse_hex_color("#ffffff"), Some(0x00FFFFFF));
        assert_eq!(parse_hex_color("#000000"), Some(0x00000000));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex_color("2563eb"), None); // missing '#'
        assert_eq!(parse_hex_color("#25ez"), None); // wrong length
        assert_eq!(parse_hex_color("#2563ez"), None); // non-hex digit
    }
}
