//! Reading and encoding picked files.

use addisplay::{encode_data_url, ImageCodec, JpegCodec, PendingImage};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::config::{JPEG_QUALITY, MAX_IMAGE_DIMENSION};

/// Read a picked file and turn it into a [`PendingImage`] ready for
/// scheduling.
///
/// The bytes go through the JPEG codec, so oversized uploads are bounded
/// and normalized before they ever reach a payload. A file the codec cannot
/// decode is reported back and skipped by the caller.
pub async fn read_pending_image(file: File) -> Result<PendingImage, String> {
    let name = file.name();

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Failed to read file: {name}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let codec = JpegCodec;
    let encoded = codec
        .resize(&bytes, MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION, JPEG_QUALITY)
        .map_err(|e| format!("{name}: {e}"))?;

    Ok(PendingImage::new(name, encode_data_url(codec.mime_type(), &encoded)))
}
