//! Outline rendering
//!
//! A static-export byproduct of template construction: boundary pixels are
//! painted black and interior pixels take their palette color. The
//! interactive fill logic never consumes this image; it exists for the
//! "print the template" path, where callers encode it with
//! [`pbn_core::to_rgb_image`].

use crate::builder::NumberedTemplate;
use pbn_core::{Color, PixelBuffer};
use pbn_region::boundary_mask;

/// Render the black-on-color outline image for a template.
pub fn render_outline(template: &NumberedTemplate) -> PixelBuffer {
    let numbers = template.numbers();
    let boundary = boundary_mask(numbers);
    let (width, height) = template.dimensions();

    // Dimensions come from the template, so construction cannot fail.
    let mut out =
        PixelBuffer::new(width, height, Color::BLACK).expect("template has valid dimensions");
    for y in 0..height {
        for x in 0..width {
            if boundary.value(x, y) == Some(true) {
                continue;
            }
            if let Some(color) = template.color_at(x, y) {
                let _ = out.set(x, y, color);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{TemplateOptions, build_template};

    #[test]
    fn test_outline_blackens_exactly_the_boundary() {
        // Left half dark red, right half bright green, 8x4.
        let mut data = Vec::new();
        for _y in 0..4 {
            for x in 0..8 {
                data.push(if x < 4 {
                    Color::new(120, 0, 0)
                } else {
                    Color::new(0, 200, 0)
                });
            }
        }
        let pix = PixelBuffer::from_vec(8, 4, data).unwrap();
        let options = TemplateOptions::for_difficulty(2).with_seed(17);
        let template = build_template(&pix, &options).unwrap();

        let outline = render_outline(&template);
        for y in 0..4 {
            for x in 0..8 {
                let c = outline.value(x, y).unwrap();
                if x == 3 || x == 4 {
                    assert_eq!(c, Color::BLACK, "boundary at ({x}, {y})");
                } else {
                    assert_eq!(
                        Some(c),
                        template.color_at(x, y),
                        "interior at ({x}, {y})"
                    );
                }
            }
        }
    }
}
