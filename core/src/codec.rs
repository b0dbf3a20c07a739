//! Resize-then-encode collaborator.
//!
//! Uploads are normalized before they are base64 encoded into the payload:
//! dimensions bounded, one codec, one quality. The trait keeps the step
//! pluggable; the rest of the core only ever sees encoded bytes.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::GenericImageView;

use crate::error::{CodecError, CodecResult};

/// Narrow seam for the resize-then-encode step.
pub trait ImageCodec {
    /// Re-encode `bytes`, bounding dimensions to `max_w` x `max_h`.
    fn resize(&self, bytes: &[u8], max_w: u32, max_h: u32, quality: u8) -> CodecResult<Vec<u8>>;

    /// MIME type of the bytes produced by [`ImageCodec::resize`].
    fn mime_type(&self) -> &'static str;
}

/// JPEG-normalizing codec backed by the `image` crate.
///
/// Oversized images shrink to fit the bounds with their aspect ratio
/// preserved; images already inside the bounds keep their dimensions.
/// Either way the result is re-encoded, so every payload carries the same
/// codec at the same quality.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCodec;

impl ImageCodec for JpegCodec {
    fn resize(&self, bytes: &[u8], max_w: u32, max_h: u32, quality: u8) -> CodecResult<Vec<u8>> {
        let img = image::load_from_memory(bytes).map_err(CodecError::Decode)?;
        let (width, height) = img.dimensions();

        let bounded = if width > max_w || height > max_h {
            img.thumbnail(max_w, max_h)
        } else {
            img
        };

        // JPEG has no alpha channel.
        let rgb = bounded.to_rgb8();
        let mut out = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut out, quality);
        rgb.write_with_encoder(encoder).map_err(CodecError::Encode)?;
        Ok(out)
    }

    fn mime_type(&self) -> &'static str {
        "image/jpeg"
    }
}

/// Base64 data URL for encoded image bytes, as sent in
/// [`crate::payload::AdPayload::image_url`].
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Inverse of [`encode_data_url`]. `None` when the input is not a base64
/// data URL.
pub fn decode_data_url(data_url: &str) -> Option<Vec<u8>> {
    let (_, encoded) = data_url.split_once(";base64,")?;
    STANDARD.decode(encoded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([120, 40, 200]));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).unwrap();
        out
    }

    #[test]
    fn data_url_round_trip_is_lossless() {
        let bytes: Vec<u8> = (0u8..=255).cycle().take(1024).collect();
        let url = encode_data_url("image/png", &bytes);
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_url(&url).unwrap(), bytes);
    }

    #[test]
    fn decode_rejects_non_data_urls() {
        assert!(decode_data_url("https://example.com/ad.png").is_none());
    }

    #[test]
    fn oversized_images_shrink_to_the_bounds_keeping_aspect() {
        let out = JpegCodec.resize(&png_bytes(1200, 900), 800, 800, 90).unwrap();

        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
        let (width, height) = image::load_from_memory(&out).unwrap().dimensions();
        assert_eq!((width, height), (800, 600));
    }

    #[test]
    fn images_inside_the_bounds_keep_their_dimensions() {
        let out = JpegCodec.resize(&png_bytes(100, 50), 800, 800, 90).unwrap();

        // Still re-encoded to the fixed codec.
        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
        let (width, height) = image::load_from_memory(&out).unwrap().dimensions();
        assert_eq!((width, height), (100, 50));
    }

    #[test]
    fn undecodable_bytes_error() {
        let err = JpegCodec.resize(b"definitely not an image", 800, 800, 90);
        assert!(matches!(err, Err(CodecError::Decode(_))));
    }
}
