// The control panel: the user-adjustable brush settings and the instructions flag.
// The main loop maps key presses onto these mutators; everything here is pure
// state so it can be exercised without a window.

use crate::types::{BrushConfig, BrushStyle};

/// The fixed six-color palette offered alongside the brush styles.
pub const PALETTE: [u32; 6] = [
    0x002563EB, // #2563eb blue
    0x00EF4444, // #ef4444 red
    0x0010B981, // #10b981 green
    0x00FCD34D, // #fcd34d yellow
    0x00F97316, // #f97316 orange
    0x00A855F7, // #a855f7 purple
];

/// The blank-postcard fill color.
pub const BACKGROUND: u32 = 0x00FFFFFF; // #ffffff

pub const MIN_SIZE: u32 = 1;
pub const MAX_SIZE: u32 = 50;

pub struct ControlPanel {
    pub config: BrushConfig,
    /// True until the first stroke starts; restored on clear.
    /// Visual: the "click to start drawing" overlay over the blank postcard.
    pub show_instructions: bool,
}

impl ControlPanel {
    /// Defaults: standard brush, palette blue, size 5.
    pub fn new() -> Self {
        Self {
            config: BrushConfig {
                color: PALETTE[0],
                size: 5,
                style: BrushStyle::Standard,
            },
            show_instructions: true,
        }
    }

    pub fn select_style(&mut self, style: BrushStyle) {
        self.config.style = style;
    }

    /// Pick a palette entry; out-of-range indices are ignored.
    pub fn select_palette(&mut self, index: usize) {
        if let Some(&color) = PALETTE.get(index) {
            self.config.color = color;
        }
    }

    /// Step the brush size, clamped to 1..=50 like the original slider.
    pub fn step_size(&mut self, delta: i32) {
        let next = self.config.size as i64 + delta as i64;
        self.config.size = next.clamp(MIN_SIZE as i64, MAX_SIZE as i64) as u32;
    }

    /// A stroke began: hide the instructions overlay.
    pub fn stroke_started(&mut self) {
        self.show_instructions = false;
    }

    /// The postcard was cleared: bring the instructions back.
    pub fn reset(&mut self) {
        self.show_instructions = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_hex_color;

    #[test]
    fn palette_matches_its_hex_labels() {
        let hex = ["#2563eb", "#ef4444", "#10b981", "#fcd34d", "#f97316", "#a855f7"];
        for (i, h) in hex.iter().enumerate() {
            assert_eq!(parse_hex_color(h), Some(PALETTE[i]), "palette entry {i}");
        }
        assert_eq!(parse_hex_color("#ffffff"), Some(BACKGROUND));
    }

    #[test]
    fn size_clamps_to_the_slider_range() {
        let mut panel = ControlPanel::new();
        panel.step_size(100);
        assert_eq!(panel.config.size, MAX_SIZE);
        panel.step_size(-200);
        assert_eq!(panel.config.size, MIN_SIZE);
        panel.step_size(4);
        assert_eq!(panel.config.size, 5);
    }

    #[test]
    fn out_of_range_palette_index_is_ignored() {
        let mut panel = ControlPanel::new();
        panel.select_palette(99);
        assert_eq!(panel.config.color, PALETTE[0]);
        panel.select_palette(3);
        assert_eq!(panel.config.color, PALETTE[3]);
    }

    #[test]
    fn instructions_flag_lifecycle() {
        let mut panel = ControlPanel::new();
        assert!(panel.show_instructions);
        panel.stroke_started();
        assert!(!panel.show_instructions);
        panel.reset();
        assert!(panel.show_instructions);
    }
}
