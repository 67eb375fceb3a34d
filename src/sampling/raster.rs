use std::ops::Deref;

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};

use crate::sampling::types::Color;

/// Read access to an already decoded frame.
///
/// `color_at` is only ever called with coordinates inside `dimensions()`; an
/// out-of-bounds read is a geometry bug and panics.
pub trait RasterImage {
    fn dimensions(&self) -> (u32, u32);
    fn color_at(&self, x: u32, y: u32) -> Color;
}

fn assert_in_bounds(x: u32, y: u32, width: u32, height: u32) {
    assert!(
        x < width && y < height,
        "pixel ({x}, {y}) outside {width}x{height} frame"
    );
}

impl<P, C> RasterImage for ImageBuffer<P, C>
where
    P: Pixel<Subpixel = u8>,
    C: Deref<Target = [u8]>,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        assert_in_bounds(x, y, self.width(), self.height());
        Color::from(self.get_pixel(x, y).to_rgb())
    }
}

impl RasterImage for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        assert_in_bounds(x, y, self.width(), self.height());
        // 16-bit storage is read at full precision; everything else goes
        // through the 8-bit RGBA view.
        match self {
            DynamicImage::ImageLuma16(img) => color16(img.get_pixel(x, y)),
            DynamicImage::ImageLumaA16(img) => color16(img.get_pixel(x, y)),
            DynamicImage::ImageRgb16(img) => color16(img.get_pixel(x, y)),
            DynamicImage::ImageRgba16(img) => color16(img.get_pixel(x, y)),
            _ => Color::from(GenericImageView::get_pixel(self, x, y)),
        }
    }
}

fn color16<P: Pixel<Subpixel = u16>>(px: &P) -> Color {
    let rgb = px.to_rgb();
    Color::new(rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn reads_rgb_buffer() {
        let mut img = RgbImage::new(4, 3);
        img.put_pixel(3, 2, Rgb([9, 8, 7]));
        assert_eq!(RasterImage::dimensions(&img), (4, 3));
        assert_eq!(img.color_at(3, 2), Color::from_rgb8(9, 8, 7));
    }

    #[test]
    fn ignores_alpha() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(1, 0, Rgba([200, 100, 50, 0]));
        assert_eq!(img.color_at(1, 0), Color::from_rgb8(200, 100, 50));
    }

    #[test]
    fn expands_gray_to_rgb() {
        let img = GrayImage::from_pixel(2, 2, Luma([42]));
        assert_eq!(img.color_at(0, 1), Color::from_rgb8(42, 42, 42));
    }

    #[test]
    fn reads_dynamic_image() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 5, Rgb([1, 2, 3])));
        assert_eq!(RasterImage::dimensions(&img), (5, 5));
        assert_eq!(img.color_at(4, 4), Color::from_rgb8(1, 2, 3));
    }

    #[test]
    fn reads_sixteen_bit_frames_without_narrowing() {
        let rgb = DynamicImage::ImageRgb16(ImageBuffer::from_pixel(20, 20, Rgb([511u16, 1000, 65535])));
        assert_eq!(rgb.color_at(0, 0), Color::new(511, 1000, 65535));
        assert_eq!(rgb.color_at(0, 0).rgb8(), [1, 3, 255]);

        let gray = DynamicImage::ImageLuma16(ImageBuffer::from_pixel(2, 2, Luma([300u16])));
        assert_eq!(gray.color_at(1, 1), Color::new(300, 300, 300));

        let rgba = DynamicImage::ImageRgba16(ImageBuffer::from_pixel(2, 2, Rgba([7u16, 8, 9, 0])));
        assert_eq!(rgba.color_at(1, 0), Color::new(7, 8, 9));
    }

    #[test]
    #[should_panic(expected = "outside 4x3 frame")]
    fn out_of_bounds_read_panics() {
        let img = RgbImage::new(4, 3);
        img.color_at(4, 0);
    }
}
