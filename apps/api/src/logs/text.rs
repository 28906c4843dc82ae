//! Log-sheet text, drawn with the DejaVu Sans face embedded in the binary.
//!
//! No system font is looked up at runtime, so the same input always rasterizes to the
//! same pixels.

use ab_glyph::{FontRef, InvalidFont, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

static SHEET_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Draws and measures text at pixel sizes.
pub struct TextPainter<'f> {
    font: FontRef<'f>,
}

impl TextPainter<'static> {
    pub fn embedded() -> Result<Self, InvalidFont> {
        Ok(Self {
            font: FontRef::try_from_slice(SHEET_FONT)?,
        })
    }
}

impl TextPainter<'_> {
    /// Advance width in pixels of `text` at `size`.
    pub fn width(&self, text: &str, size: f32) -> u32 {
        text_size(PxScale::from(size), &self.font, text).0
    }

    /// Longest prefix of `text` that fits in `max_width` pixels at `size`.
    pub fn fit<'t>(&self, text: &'t str, size: f32, max_width: u32) -> &'t str {
        if self.width(text, size) <= max_width {
            return text;
        }
        let mut fitted = "";
        for (end, c) in text.char_indices() {
            let candidate = &text[..end + c.len_utf8()];
            if self.width(candidate, size) > max_width {
                break;
            }
            fitted = candidate;
        }
        fitted
    }

    /// Draws `text` with the top of its line box at (`x`, `y`).
    pub fn draw(&self, image: &mut RgbImage, x: i32, y: i32, text: &str, size: f32, color: Rgb<u8>) {
        draw_text_mut(image, color, x, y, PxScale::from(size), &self.font, text);
    }

    /// Draws `text` centered on (`cx`, `cy`).
    pub fn draw_centered(
        &self,
        image: &mut RgbImage,
        cx: i32,
        cy: i32,
        text: &str,
        size: f32,
        color: Rgb<u8>,
    ) {
        let x = cx - self.width(text, size) as i32 / 2;
        let y = cy - (size / 2.0).round() as i32;
        self.draw(image, x, y, text, size, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn painter() -> TextPainter<'static> {
        TextPainter::embedded().unwrap()
    }

    fn inked(image: &RgbImage) -> usize {
        image.pixels().filter(|p| **p != WHITE).count()
    }

    #[test]
    fn test_width_grows_with_text_and_size() {
        let p = painter();
        assert_eq!(p.width("", 14.0), 0);
        let short = p.width("DRIVING", 14.0);
        assert!(short > 0);
        assert!(p.width("DRIVING HOURS", 14.0) > short);
        assert!(p.width("DRIVING", 28.0) > short);
    }

    #[test]
    fn test_fit_truncates_to_width() {
        let p = painter();
        assert_eq!(p.fit("Philadelphia, PA", 14.0, 1000), "Philadelphia, PA");
        assert_eq!(p.fit("Philadelphia, PA", 14.0, 0), "");

        let room = p.width("Phila", 14.0);
        let fitted = p.fit("Philadelphia, PA", 14.0, room);
        assert!(fitted.starts_with("Phila"));
        assert!(p.width(fitted, 14.0) <= room);
        assert!(fitted.len() < "Philadelphia, PA".len());
    }

    #[test]
    fn test_fit_respects_char_boundaries() {
        let p = painter();
        let fitted = p.fit("Zürich, CH", 14.0, p.width("Zü", 14.0));
        assert!(fitted == "Zü" || fitted == "Z");
    }

    #[test]
    fn test_draw_inks_inside_the_line_box() {
        let mut image = RgbImage::from_pixel(120, 40, WHITE);
        painter().draw(&mut image, 5, 5, "HOS", 20.0, BLACK);
        assert!(inked(&image) > 0);
        for y in 0..3 {
            for x in 0..120 {
                assert_eq!(*image.get_pixel(x, y), WHITE);
            }
        }
    }

    #[test]
    fn test_draw_is_deterministic() {
        let mut a = RgbImage::from_pixel(200, 40, WHITE);
        let mut b = RgbImage::from_pixel(200, 40, WHITE);
        painter().draw_centered(&mut a, 100, 20, "REST - MILE 605", 14.0, BLACK);
        painter().draw_centered(&mut b, 100, 20, "REST - MILE 605", 14.0, BLACK);
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_clips_off_canvas() {
        let mut image = RgbImage::from_pixel(4, 4, WHITE);
        painter().draw(&mut image, -30, -30, "WWW", 20.0, BLACK);
        painter().draw(&mut image, 100, 100, "W", 14.0, BLACK);
    }
}
