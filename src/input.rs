// The input translator: turns per-frame pointer samples into gestures.
// Visual: press inside the postcard starts a stroke, dragging extends it, and
// releasing the button (or sliding off the postcard) lifts the brush.

use crate::types::Gesture;

/// Tracks the two-state stroke lifecycle (idle / drawing) plus the last pointer
/// position, which stands in for the implicit "current path point".
pub struct InputTranslator {
    drawing: bool,
    prev_pressed: bool,
    last: (i32, i32),
}

impl InputTranslator {
    pub fn new() -> Self {
        Self { drawing: false, prev_pressed: false, last: (0, 0) }
    }

    /// Feed one frame's pointer sample: whether the button is down, and the
    /// pointer position in surface-local coordinates (None when the host window
    /// can't report one). `on_surface` says whether that position lands on the
    /// postcard.
    ///
    /// Returns the gesture this sample translates to, or None. Moves while idle
    /// translate to nothing, by design; a press that began outside the postcard
    /// never starts a stroke.
    pub fn translate(
        &mut self,
        pressed: bool,
        pos: Option<(i32, i32)>,
        on_surface: bool,
    ) -> Option<Gesture> {
        let press_edge = pressed && !self.prev_pressed;
        self.prev_pressed = pressed;

        if !self.drawing {
            // Only a fresh press landing on the postcard begins a stroke.
            if press_edge && on_surface {
                if let Some((x, y)) = pos {
                    self.drawing = true;
                    self.last = (x, y);
                    return Some(Gesture::Start { x, y });
                }
            }
            return None;
        }

        // A stroke is active. Losing the pointer, leaving the postcard, or
        // releasing the button all end it (mirrors mouseup + mouseleave).
        let (x, y) = match pos {
            Some(p) if pressed && on_surface => p,
            _ => {
                self.drawing = false;
                return Some(Gesture::Stop);
            }
        };

        // Holding still produces no gesture; the host only "moves" when the
        // pointer actually moved.
        if (x, y) == self.last {
            return None;
        }

        let from = self.last;
        self.last = (x, y);
        Some(Gesture::Continue { from, to: (x, y) })
    }

    /// Drop any in-progress stroke without emitting a gesture. Called when the
    /// surface is cleared or re-created under the pointer.
    pub fn cancel(&mut self) {
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::apply_stroke;
    use crate::controls::ControlPanel;
    use crate::gamma::GammaLut;
    use crate::rng::Rng32;
    use crate::surface::Surface;
    use crate::types::{BrushStyle, Gesture};

    #[test]
    fn moves_while_idle_translate_to_nothing() {
        let mut t = InputTranslator::new();
        assert_eq!(t.translate(false, Some((10, 10)), true), None);
        assert_eq!(t.translate(false, Some((20, 20)), true), None);
        assert!(!t.is_drawing());
    }

    #[test]
    fn held_button_entering_the_surface_does_not_start() {
        let mut t = InputTranslator::new();
        // Button already down outside the postcard...
        assert_eq!(t.translate(true, Some((-5, -5)), false), None);
        // ...then dragged onto it: no press edge, so no stroke.
        assert_eq!(t.translate(true, Some((10, 10)), true), None);
        assert!(!t.is_drawing());
    }

    #[test]
    fn press_drag_release_lifecycle() {
        let mut t = InputTranslator::new();
        assert_eq!(t.translate(true, Some((10, 10)), true), Some(Gesture::Start { x: 10, y: 10 }));
        assert_eq!(
            t.translate(true, Some((20, 20)), true),
            Some(Gesture::Continue { from: (10, 10), to: (20, 20) })
        );
        // Holding still: nothing
        assert_eq!(t.translate(true, Some((20, 20)), true), None);
        assert_eq!(t.translate(false, Some((20, 20)), true), Some(Gesture::Stop));
        assert!(!t.is_drawing());
    }

    #[test]
    fn leaving_the_surface_stops_the_stroke() {
        let mut t = InputTranslator::new();
        t.translate(true, Some((10, 10)), true);
        assert_eq!(t.translate(true, Some((900, 10)), false), Some(Gesture::Stop));
        assert!(!t.is_drawing());
    }

    #[test]
    fn idle_moves_leave_the_surface_untouched() {
        let mut surface = Surface::initialize(500, 400, 0x00FFFFFF);
        let blank = surface.pixels.clone();
        let mut t = InputTranslator::new();
        let panel = ControlPanel::new();
        let mut rng = Rng32::from_seed(3);
        let lut = GammaLut::new();

        // Drag the pointer around without ever pressing
        for pos in [(10, 10), (40, 40), (80, 20)] {
            if let Some(Gesture::Continue { from, to }) = t.translate(false, Some(pos), true) {
                apply_stroke(&mut surface, from, to, &panel.config, &mut rng, &lut);
            }
        }
        assert_eq!(surface.pixels, blank);
    }

    /// The end-to-end scenario: start at (10,10) with the default brush
    /// (standard, #2563eb, size 5), continue to (20,20), stop.
    #[test]
    fn one_standard_stroke_end_to_end() {
        let mut surface = Surface::initialize(500, 400, 0x00FFFFFF);
        let mut t = InputTranslator::new();
        let mut panel = ControlPanel::new();
        let mut rng = Rng32::from_seed(3);
        let lut = GammaLut::new();

        assert_eq!(panel.config.style, BrushStyle::Standard);
        assert_eq!(panel.config.color, 0x002563EB);
        assert_eq!(panel.config.size, 5);
        assert!(panel.show_instructions);

        for (pressed, pos) in [(true, (10, 10)), (true, (20, 20)), (false, (20, 20))] {
            match t.translate(pressed, Some(pos), true) {
                Some(Gesture::Start { .. }) => panel.show_instructions = false,
                Some(Gesture::Continue { from, to }) => {
                    apply_stroke(&mut surface, from, to, &panel.config, &mut rng, &lut);
                }
                Some(Gesture::Stop) | None => {}
            }
        }

        // Instructions disappeared the moment the stroke started
        assert!(!panel.show_instructions);

        // One width-5 blue segment from (10,10) to (20,20), nothing else
        assert_eq!(surface.pixel(10, 10), Some(0x002563EB));
        assert_eq!(surface.pixel(15, 15), Some(0x002563EB));
        assert_eq!(surface.pixel(20, 20), Some(0x002563EB));
        assert_eq!(surface.pixel(100, 100), Some(0x00FFFFFF));
    }
}
