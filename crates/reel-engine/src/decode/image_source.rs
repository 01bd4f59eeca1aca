use std::io::Cursor;

use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::codecs::webp::WebPDecoder;
use image::{AnimationDecoder, ImageDecoder, ImageFormat, ImageReader, Limits};

use crate::anim::{Bitmap, ImageSource};
use crate::coords::Size;
use crate::error::DecodeError;

/// Largest canvas side accepted, in pixels.
const MAX_CANVAS_SIDE: u32 = 16_384;

/// `image` defaults (allocation cap) plus a canvas side cap.
fn decode_limits() -> Limits {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_CANVAS_SIDE);
    limits.max_image_height = Some(MAX_CANVAS_SIDE);
    limits
}

struct SourceFrame {
    bitmap: Bitmap,
    duration: f32,
}

/// Fully decoded image: every composited frame with its delay.
///
/// GIF and APNG produce one entry per frame; any other format the `image`
/// crate reads becomes a single frame with zero duration.
///
/// Canvas sides and allocations are capped: a header declaring a huge canvas
/// fails with [`DecodeError::Image`] instead of being allocated.
pub struct DecodedImage {
    format: ImageFormat,
    frames: Vec<SourceFrame>,
}

impl DecodedImage {
    /// Sniffs the container format and decodes all frames.
    pub fn open(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let format = image::guess_format(bytes)?;
        let frames = match format {
            ImageFormat::Gif => {
                let mut decoder = GifDecoder::new(Cursor::new(bytes))?;
                decoder.set_limits(decode_limits())?;
                animation(decoder)?
            }
            ImageFormat::Png => {
                let mut decoder = PngDecoder::new(Cursor::new(bytes))?;
                decoder.set_limits(decode_limits())?;
                if decoder.is_apng()? {
                    animation(decoder.apng()?)?
                } else {
                    still(bytes, format)?
                }
            }
            ImageFormat::WebP => {
                let mut decoder = WebPDecoder::new(Cursor::new(bytes))?;
                decoder.set_limits(decode_limits())?;
                // Animated WebP shares the frame collection with GIF and APNG.
                if decoder.has_animation() {
                    animation(decoder)?
                } else {
                    still(bytes, format)?
                }
            }
            _ => still(bytes, format)?,
        };

        if frames.is_empty() {
            return Err(DecodeError::NoFrames);
        }

        log::debug!("decoded {format:?}: {} frames", frames.len());
        Ok(Self { format, frames })
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Size of the first frame. Animation frames are full-canvas, so this is
    /// the canvas size.
    pub fn canvas_size(&self) -> Size {
        self.frames.first().map_or(Size::ZERO, |f| f.bitmap.size())
    }
}

impl ImageSource for DecodedImage {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn duration(&self, index: usize) -> f32 {
        self.frames.get(index).map_or(0.0, |f| f.duration)
    }

    fn bitmap(&self, index: usize) -> Bitmap {
        self.frames
            .get(index)
            .map_or_else(Bitmap::empty, |f| f.bitmap.clone())
    }
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("format", &self.format)
            .field("frames", &self.frames.len())
            .field("canvas", &self.canvas_size())
            .finish()
    }
}

fn animation<'a, D: AnimationDecoder<'a>>(decoder: D) -> Result<Vec<SourceFrame>, DecodeError> {
    let frames = decoder.into_frames().collect_frames()?;
    Ok(frames
        .into_iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            let duration = if denom == 0 {
                0.0
            } else {
                numer as f32 / denom as f32 / 1000.0
            };
            SourceFrame {
                bitmap: Bitmap::from(frame.into_buffer()),
                duration,
            }
        })
        .collect())
}

fn still(bytes: &[u8], format: ImageFormat) -> Result<Vec<SourceFrame>, DecodeError> {
    let mut reader = ImageReader::with_format(Cursor::new(bytes), format);
    reader.limits(decode_limits());
    let image = reader.decode()?;
    Ok(vec![SourceFrame {
        bitmap: Bitmap::from(image.into_rgba8()),
        duration: 0.0,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, DynamicImage, Frame, Rgba, RgbaImage};

    fn gif_bytes(delays_ms: &[u32], w: u32, h: u32) -> Vec<u8> {
        let colors = [[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]];
        let frames: Vec<Frame> = delays_ms
            .iter()
            .enumerate()
            .map(|(i, &ms)| {
                let buffer = RgbaImage::from_pixel(w, h, Rgba(colors[i % colors.len()]));
                Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(ms, 1))
            })
            .collect();

        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder.encode_frames(frames).unwrap();
        }
        bytes
    }

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([9, 9, 9, 255])));
        let mut cursor = Cursor::new(Vec::new());
        image.write_to(&mut cursor, ImageFormat::Png).unwrap();
        cursor.into_inner()
    }

    // ── animated ──────────────────────────────────────────────────────────

    #[test]
    fn gif_yields_every_frame_with_delay() {
        let bytes = gif_bytes(&[100, 200, 50], 4, 3);
        let image = DecodedImage::open(&bytes).unwrap();

        assert_eq!(image.format(), ImageFormat::Gif);
        assert_eq!(image.frame_count(), 3);
        assert_relative_eq!(image.duration(0), 0.1, epsilon = 1e-6);
        assert_relative_eq!(image.duration(1), 0.2, epsilon = 1e-6);
        assert_relative_eq!(image.duration(2), 0.05, epsilon = 1e-6);
        assert_eq!(image.canvas_size(), Size::new(4.0, 3.0));
        assert_eq!(image.bitmap(2).size(), Size::new(4.0, 3.0));
    }

    #[test]
    fn out_of_range_index_is_harmless() {
        let bytes = gif_bytes(&[100, 100], 2, 2);
        let image = DecodedImage::open(&bytes).unwrap();
        assert_eq!(image.duration(5), 0.0);
        assert!(image.bitmap(5).is_empty());
    }

    #[test]
    fn apng_yields_every_frame_with_delay() {
        let (w, h) = (3, 2);
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, w, h);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_animated(2, 0).unwrap();
            encoder.set_frame_delay(1, 10).unwrap();
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[255; 3 * 2 * 4]).unwrap();
            writer.set_frame_delay(1, 5).unwrap();
            writer.write_image_data(&[64; 3 * 2 * 4]).unwrap();
            writer.finish().unwrap();
        }

        let image = DecodedImage::open(&bytes).unwrap();
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!(image.frame_count(), 2);
        assert_relative_eq!(image.duration(0), 0.1, epsilon = 1e-6);
        assert_relative_eq!(image.duration(1), 0.2, epsilon = 1e-6);
        assert_eq!(image.canvas_size(), Size::new(3.0, 2.0));
    }

    // ── still ─────────────────────────────────────────────────────────────

    #[test]
    fn png_is_single_zero_duration_frame() {
        let image = DecodedImage::open(&png_bytes(5, 7)).unwrap();
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!(image.frame_count(), 1);
        assert_eq!(image.duration(0), 0.0);
        assert_eq!(image.canvas_size(), Size::new(5.0, 7.0));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn empty_bytes_fail() {
        assert!(matches!(DecodedImage::open(&[]), Err(DecodeError::Empty)));
    }

    #[test]
    fn unknown_bytes_fail() {
        let garbage = b"definitely not an image";
        assert!(matches!(
            DecodedImage::open(garbage),
            Err(DecodeError::Image(_))
        ));
    }

    #[test]
    fn header_only_gif_fails() {
        // Valid signature, no screen descriptor or frames.
        assert!(DecodedImage::open(b"GIF89a").is_err());
    }

    #[test]
    fn huge_canvas_gif_is_rejected_without_allocating() {
        // 65535x65535 screen and frame: ~17 GB of RGBA if decoded.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"GIF89a");
        bytes.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF, 0x80, 0x00, 0x00]);
        bytes.extend_from_slice(&[0, 0, 0, 255, 255, 255]);
        bytes.extend_from_slice(&[0x2C, 0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
        bytes.extend_from_slice(&[0x02, 0x02, 0x44, 0x01, 0x00]);
        bytes.push(0x3B);

        assert!(matches!(
            DecodedImage::open(&bytes),
            Err(DecodeError::Image(_))
        ));
    }
}
