// What you SEE now:
// • A blank white postcard centered over a pale-blue desk.
// • Hold Left Mouse on the postcard: you paint with the active brush.
// • 1–5 pick a brush style (standard / impressionist / pointillist /
//   expressionist / eraser). F1–F6 pick a palette color. [ and ] resize the brush.
// • C clears the postcard. S saves my-postcard.png. ESC quits.

mod brush;
mod controls;
mod draw;
mod error;
mod export;
mod gamma;
mod input;
mod rng;
mod surface;
mod types;

use brush::apply_stroke;
use controls::ControlPanel;
use draw::Drawer;
use error::Error;
use gamma::GammaLut;
use input::InputTranslator;
use rng::Rng32;
use std::path::Path;
use surface::Surface;
use types::Gesture;

/// The pale-blue desk the postcard sits on (only ever seen around its edges).
const DESK: u32 = 0x00E0F2FE;
/// HUD text color.
const HUD_INK: u32 = 0x00FFFFFF;
/// Instructions text color over the frosted overlay.
const OVERLAY_INK: u32 = 0x006B7280;

fn main() -> Result<(), Error> {
    /* --- Window setup ---
       Visual: the window opens showing a blank postcard on the desk. */
    let mut drawer = Drawer::new("Postcard Creator", 900, 700)?;
    let mut viewport = drawer.size();

    /* --- The postcard surface (sized from the viewport, capped at 800x600) --- */
    let mut postcard = Surface::initialize(viewport.0, viewport.1, controls::BACKGROUND);

    /* --- The composed screen (desk + postcard + HUD), window-sized --- */
    let mut screen = Surface::with_size(viewport.0, viewport.1, DESK);

    /* --- Brush settings, gesture tracking, jitter RNG, blend tables --- */
    let mut panel = ControlPanel::new();
    let mut translator = InputTranslator::new();
    let mut jitter = Rng32::from_clock();
    let lut = GammaLut::new();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Viewport changes re-create the postcard. The drawing is lost; that
              is the accepted behavior, same as the original resize. */
        let now = drawer.size();
        if now != viewport {
            viewport = now;
            postcard.resize(viewport.0, viewport.1);
            screen = Surface::with_size(viewport.0, viewport.1, DESK);
            translator.cancel();
        }

        /* 2) Control panel inputs (style / color / size / clear / save). */
        if let Some(style) = drawer.style_key_pressed() {
            panel.select_style(style); // visual: the HUD label changes; next strokes differ
        }
        if let Some(index) = drawer.palette_key_pressed() {
            panel.select_palette(index); // visual: the HUD swatch changes color
        }
        let step = drawer.size_step_pressed();
        if step != 0 {
            panel.step_size(step); // clamped to 1..=50, like the slider it stands in for
        }
        if drawer.clear_pressed_once() {
            postcard.clear(); // visual: the drawing disappears
            translator.cancel();
            panel.reset(); // visual: the instructions overlay returns
        }
        if drawer.save_pressed_once() {
            export::save_png(&postcard, Path::new(export::EXPORT_FILENAME))?;
            println!("Saved {}", export::EXPORT_FILENAME); // terminal confirmation
        }

        /* 3) Translate this frame's pointer sample into a gesture and apply it.
              The postcard sits centered; mouse coordinates become surface-local. */
        let ox = (screen.width as i32 - postcard.width as i32) / 2;
        let oy = (screen.height as i32 - postcard.height as i32) / 2;
        let pos = drawer.mouse_pos().map(|(mx, my)| (mx - ox, my - oy));
        let on_surface = pos.is_some_and(|(x, y)| postcard.contains(x, y));

        match translator.translate(drawer.left_mouse_down(), pos, on_surface) {
            Some(Gesture::Start { .. }) => {
                panel.stroke_started(); // visual: the instructions overlay goes away
            }
            Some(Gesture::Continue { from, to }) => {
                // visual: paint appears under the cursor per the active style
                apply_stroke(&mut postcard, from, to, &panel.config, &mut jitter, &lut);
            }
            Some(Gesture::Stop) | None => {}
        }

        /* 4) Compose the frame: desk, postcard, overlay, HUD. */
        screen.clear();
        draw::blit(&mut screen, &postcard, ox, oy);

        if panel.show_instructions {
            // Frosted white wash over the postcard with centered hint text
            draw::wash_rect(
                &mut screen,
                ox,
                oy,
                postcard.width as i32,
                postcard.height as i32,
                0x00FFFFFF,
                0.7,
            );
            let hint = "CLICK OR TAP TO START DRAWING YOUR POSTCARD!";
            let tx = ox + (postcard.width as i32 - draw::text_width_5x7(hint)) / 2;
            let ty = oy + (postcard.height as i32 - 7) / 2;
            draw::draw_text_5x7(&mut screen, tx, ty, hint, OVERLAY_INK);
        }

        let hud = format!(
            "{} | SIZE {:02} | 1-5 STYLE  F1-F6 COLOR  [ ] SIZE  C CLEAR  S SAVE",
            panel.config.style.label(),
            panel.config.size
        );
        draw::draw_text_5x7(&mut screen, 8, 8, &hud, HUD_INK);
        // Current brush color swatch at the end of the HUD line
        let swatch_x = 8 + draw::text_width_5x7(&hud) + 8;
        draw::fill_rect(&mut screen, swatch_x, 6, 12, 12, panel.config.color);

        /* 5) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;
    }

    Ok(())
}
