//! Wire payload for the ad creation endpoint.

use crate::pending::PendingImage;
use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/images`, one per submitted image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdPayload {
    /// Original filename, unmodified. Display-side truncation never reaches
    /// the wire.
    pub image_name: String,
    /// Base64 data URL of the encoded image.
    pub image_url: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    /// Display duration in seconds.
    pub duration: u32,
}

/// Build the payload for one image.
///
/// `duration` comes from the allocator, not from the image itself, so
/// equally divided batches never persist per-image values.
pub fn build_payload(image: &PendingImage, schedule: &Schedule, duration: u32) -> AdPayload {
    AdPayload {
        image_name: image.file_name.clone(),
        image_url: image.data_url.clone(),
        start_date: schedule.start_date.clone(),
        end_date: schedule.end_date.clone(),
        start_time: schedule.start_time.clone(),
        end_time: schedule.end_time.clone(),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_to_camel_case_with_numeric_duration() {
        let image = PendingImage::new("banner.png", "data:image/jpeg;base64,AAAA");
        let schedule = Schedule::new("2024-11-20", "2024-11-25", "08:00:00", "18:00:00");

        let value = serde_json::to_value(build_payload(&image, &schedule, 30)).unwrap();

        assert_eq!(value["imageName"], "banner.png");
        assert_eq!(value["imageUrl"], "data:image/jpeg;base64,AAAA");
        assert_eq!(value["startDate"], "2024-11-20");
        assert_eq!(value["endDate"], "2024-11-25");
        assert_eq!(value["startTime"], "08:00:00");
        assert_eq!(value["endTime"], "18:00:00");
        assert_eq!(value["duration"], serde_json::json!(30));
    }

    #[test]
    fn filename_is_not_sanitized_or_shortened() {
        let image = PendingImage::new(
            "a very long näme with spaces and 30+ characters.jpeg",
            "data:;base64,",
        );
        let payload = build_payload(&image, &Schedule::default(), 0);
        assert_eq!(
            payload.image_name,
            "a very long näme with spaces and 30+ characters.jpeg"
        );
    }
}
