// The stroke renderer: one pure rule per brush style, applied per Continue gesture.
// Visual outcomes:
// - Standard: a plain solid line following the cursor.
// - Impressionist: short choppy half-transparent strokes that shimmer.
// - Pointillist: a trail of dots.
// - Expressionist: a thick line with a nervous wobble.
// - Eraser: the background color painted back in.

use crate::gamma::GammaLut;
use crate::rng::Rng32;
use crate::surface::Surface;
use crate::types::{BrushConfig, BrushStyle};

/// How far the impressionist jitter can push the segment start, in pixels.
pub const IMPRESSIONIST_JITTER: f32 = 5.0;
/// How far the expressionist jitter can push the segment end, in pixels.
pub const EXPRESSIONIST_JITTER: f32 = 2.0;

/// Apply one stroke step from `from` to `to` using the active brush.
/// Pure dispatch on the style; the only state it touches is the surface pixels.
pub fn apply_stroke(
    surface: &mut Surface,
    from: (i32, i32),
    to: (i32, i32),
    config: &BrushConfig,
    rng: &mut Rng32,
    lut: &GammaLut,
) {
    let size = config.size as f32;
    match config.style {
        BrushStyle::Standard => {
            // Full-opacity segment of width `size` between the two points.
            fill_capsule(surface, from, to, size, |_| config.color);
        }
        BrushStyle::Impressionist => {
            // A short independent dab: from a jittered copy of the current point
            // back to the current point, double width, half opacity.
            // Visual: overlapping translucent chips instead of one smooth line.
            let start = (
                to.0 + rng.range(0.0, IMPRESSIONIST_JITTER).round() as i32,
                to.1 + rng.range(0.0, IMPRESSIONIST_JITTER).round() as i32,
            );
            fill_capsule(surface, start, to, size * 2.0, |old| {
                lut.mix_srgb(old, config.color, 0.5)
            });
        }
        BrushStyle::Pointillist => {
            // A filled disk of radius size/2 at the current point; the previous
            // point is ignored on purpose.
            fill_capsule(surface, to, to, size, |_| config.color);
        }
        BrushStyle::Expressionist => {
            // Thicker segment whose endpoint wanders a little.
            let end = (
                to.0 + rng.range(0.0, EXPRESSIONIST_JITTER).round() as i32,
                to.1 + rng.range(0.0, EXPRESSIONIST_JITTER).round() as i32,
            );
            fill_capsule(surface, from, end, size * 1.5, |_| config.color);
        }
        BrushStyle::Eraser => {
            // Erasure by overpaint: a wide segment in the background color.
            let background = surface.background;
            fill_capsule(surface, from, to, size * 2.0, |_| background);
        }
    }
}

/// Paint every pixel within `width/2` of the segment from `a` to `b` (a round-cap
/// stroke; with a == b this is a filled disk). `paint` maps the old pixel value to
/// the new one, so solid and translucent brushes share this one rasterizer.
/// Scans just the bounding box; the distance test keeps the footprint exact.
fn fill_capsule<F>(surface: &mut Surface, a: (i32, i32), b: (i32, i32), width: f32, mut paint: F)
where
    F: FnMut(u32) -> u32,
{
    let radius = width.max(1.0) / 2.0;
    let r = radius.ceil() as i32;

    let x0 = a.0.min(b.0) - r;
    let x1 = a.0.max(b.0) + r;
    let y0 = a.1.min(b.1) - r;
    let y1 = a.1.max(b.1) + r;

    let r2 = radius * radius;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if dist2_to_segment((x, y), a, b) > r2 {
                continue; // outside the stroke footprint
            }
            if let Some(old) = surface.pixel(x, y) {
                surface.put_pixel(x, y, paint(old));
            }
        }
    }
}

/// Squared distance from point `p` to the segment `a`..`b`.
fn dist2_to_segment(p: (i32, i32), a: (i32, i32), b: (i32, i32)) -> f32 {
    let (px, py) = (p.0 as f32, p.1 as f32);
    let (ax, ay) = (a.0 as f32, a.1 as f32);
    let (bx, by) = (b.0 as f32, b.1 as f32);

    let (dx, dy) = (bx - ax, by - ay);
    let len2 = dx * dx + dy * dy;

    // Degenerate segment: plain point distance
    if len2 <= f32::EPSILON {
        let (ex, ey) = (px - ax, py - ay);
        return ex * ex + ey * ey;
    }

    // Project p onto the segment and clamp to its ends
    let t = ((px - ax) * dx + (py - ay) * dy) / len2;
    let t = t.clamp(0.0, 1.0);
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    let (ex, ey) = (px - cx, py - cy);
    ex * ex + ey * ey
}
