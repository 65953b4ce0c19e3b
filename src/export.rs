// One-shot PNG export: pack the surface's 0x00RRGGBB pixels into an RGB image
// and write it out. The fixed filename mirrors the original download name.

use crate::error::Error;
use crate::surface::Surface;
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// The postcard is always saved under this name; there are no format options.
pub const EXPORT_FILENAME: &str = "my-postcard.png";

/// Unpack the surface into an `image` RGB buffer, one channel at a time.
fn to_rgb_image(surface: &Surface) -> RgbImage {
    let mut img = ImageBuffer::new(surface.width as u32, surface.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let px = surface.pixels[y as usize * surface.width + x as usize];
        // px = 0x00RRGGBB
        let r = ((px >> 16) & 0xFF) as u8;
        let g = ((px >> 8) & 0xFF) as u8;
        let b = (px & 0xFF) as u8;
        *pixel = Rgb([r, g, b]);
    }
    img
}

/// Serialize the current surface to PNG bytes in memory.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, Error> {
    let img = to_rgb_image(surface);
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| Error::ExportEncode(format!("PNG encode: {e}")))?;
    Ok(bytes.into_inner())
}

/// Encode the surface and write it to `path`.
/// Visual: nothing changes on screen; the file appears on disk.
pub fn save_png(surface: &Surface, path: &Path) -> Result<(), Error> {
    let bytes = encode_png(surface)?;
    std::fs::write(path, &bytes)
        .map_err(|e| Error::ExportWrite(format!("{}: {e}", path.display())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::apply_stroke;
    use crate::gamma::GammaLut;
    use crate::rng::Rng32;
    use crate::types::{BrushConfig, BrushStyle};

    const WHITE: u32 = 0x00FFFFFF;

    fn painted_surface() -> Surface {
        let mut s = Surface::initialize(500, 400, WHITE);
        let config = BrushConfig { color: 0x002563EB, size: 8, style: BrushStyle::Standard };
        let mut rng = Rng32::from_seed(11);
        let lut = GammaLut::new();
        apply_stroke(&mut s, (30, 30), (120, 90), &config, &mut rng, &lut);
        s
    }

    #[test]
    fn clear_then_export_matches_a_fresh_surface() {
        let fresh = Surface::initialize(500, 400, WHITE);
        let mut painted = painted_surface();
        painted.clear();

        let a = encode_png(&fresh).unwrap();
        let b = encode_png(&painted).unwrap();
        assert_eq!(a, b, "cleared surface must export byte-identically to a blank one");
    }

    #[test]
    fn export_round_trips_pixels_and_dimensions() {
        let s = painted_surface();
        let bytes = encode_png(&s).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (s.width as u32, s.height as u32));
        // Spot-check a painted pixel and a blank one
        assert_eq!(decoded.get_pixel(30, 30), &Rgb([0x25, 0x63, 0xEB]));
        assert_eq!(decoded.get_pixel(400, 200), &Rgb([0xFF, 0xFF, 0xFF]));
    }

    #[test]
    fn save_writes_the_file() {
        let s = painted_surface();
        let path = std::env::temp_dir().join("postcard-creator-save-test.png");
        save_png(&s, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, encode_png(&s).unwrap());
        let _ = std::fs::remove_file(&path);
    }
}
