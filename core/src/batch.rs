//! Sequential batch submission with fail-fast semantics.
//!
//! One create request per image, strictly in batch order, never more than
//! one in flight, no retries. The first failure aborts the remainder and the
//! surfaced message describes that image only.

use std::future::Future;

use crate::allocator::{self, SubmissionMode};
use crate::error::ApiError;
use crate::payload::{build_payload, AdPayload};
use crate::pending::PendingImage;
use crate::schedule::Schedule;

/// Lifecycle of one submission batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    /// No batch in flight.
    Idle,
    /// Requests are being issued.
    Submitting,
    /// Every image was accepted by the server.
    Completed,
    /// A request failed; the remaining images were never sent.
    Aborted,
}

/// Terminal report of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// [`BatchState::Completed`] or [`BatchState::Aborted`].
    pub state: BatchState,
    /// Images accepted by the server before the batch ended.
    pub submitted: usize,
    /// User-facing status line for the whole run.
    pub message: String,
}

/// Message shown when the whole batch went through.
pub const MSG_BATCH_OK: &str = "Image uploaded successfully!";
/// Fallback when the server reports failure without an error body.
pub const MSG_REMOTE_FALLBACK: &str = "Failed to upload an image. Please try again.";
/// Message shown when the request itself failed (network, DNS, timeout).
pub const MSG_TRANSPORT: &str = "An error occurred while uploading an image.";

/// Submit every pending image in order, one request at a time.
///
/// Durations come from the allocator, so manual and equally divided batches
/// share one path. `send` is the transport seam; the frontend passes the
/// gloo-net client, tests pass a closure.
///
/// Callers own the pending list and are expected to clear it once a
/// terminal state is reached, whether or not every image was sent.
pub async fn run_batch<F, Fut>(
    images: &[PendingImage],
    schedule: &Schedule,
    mode: SubmissionMode,
    total_minutes: f64,
    mut send: F,
) -> BatchOutcome
where
    F: FnMut(AdPayload) -> Fut,
    Fut: Future<Output = Result<serde_json::Value, ApiError>>,
{
    if images.is_empty() {
        return BatchOutcome {
            state: BatchState::Completed,
            submitted: 0,
            message: String::new(),
        };
    }

    let durations = allocator::allocate(mode, images, total_minutes);
    let mut submitted = 0;

    for (image, duration) in images.iter().zip(durations) {
        let payload = build_payload(image, schedule, duration);
        match send(payload).await {
            Ok(_created) => submitted += 1,
            Err(ApiError::Remote(message)) => {
                let message = if message.is_empty() {
                    MSG_REMOTE_FALLBACK.to_string()
                } else {
                    message
                };
                return BatchOutcome {
                    state: BatchState::Aborted,
                    submitted,
                    message,
                };
            }
            Err(ApiError::Transport(_)) => {
                return BatchOutcome {
                    state: BatchState::Aborted,
                    submitted,
                    message: MSG_TRANSPORT.to_string(),
                };
            }
        }
    }

    BatchOutcome {
        state: BatchState::Completed,
        submitted,
        message: MSG_BATCH_OK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn image(name: &str, duration_secs: u32) -> PendingImage {
        let mut image = PendingImage::new(name, format!("data:image/jpeg;base64,{name}"));
        image.duration_secs = duration_secs;
        image
    }

    fn schedule() -> Schedule {
        Schedule::new("2024-11-20", "2024-11-25", "08:00:00", "18:00:00")
    }

    #[test]
    fn all_accepted_completes_in_order() {
        let images = vec![image("a.png", 10), image("b.png", 20), image("c.png", 30)];
        let sent = RefCell::new(Vec::new());

        let outcome = block_on(run_batch(
            &images,
            &schedule(),
            SubmissionMode::Manual,
            0.0,
            |payload| {
                sent.borrow_mut().push((payload.image_name, payload.duration));
                let result: Result<serde_json::Value, ApiError> = Ok(serde_json::json!({"id": 1}));
                async move { result }
            },
        ));

        assert_eq!(outcome.state, BatchState::Completed);
        assert_eq!(outcome.submitted, 3);
        assert_eq!(outcome.message, MSG_BATCH_OK);
        assert_eq!(
            *sent.borrow(),
            vec![
                ("a.png".to_string(), 10),
                ("b.png".to_string(), 20),
                ("c.png".to_string(), 30),
            ]
        );
    }

    #[test]
    fn first_remote_failure_aborts_the_rest() {
        let images = vec![image("a.png", 10), image("b.png", 20)];
        let calls = RefCell::new(0usize);

        let outcome = block_on(run_batch(
            &images,
            &schedule(),
            SubmissionMode::Manual,
            0.0,
            |_payload| {
                *calls.borrow_mut() += 1;
                let result: Result<serde_json::Value, ApiError> =
                    Err(ApiError::Remote("bad date".into()));
                async move { result }
            },
        ));

        // The second image is never sent and the server message surfaces as-is.
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(outcome.state, BatchState::Aborted);
        assert_eq!(outcome.submitted, 0);
        assert_eq!(outcome.message, "bad date");
    }

    #[test]
    fn failure_midway_keeps_the_earlier_successes_counted() {
        let images = vec![image("a.png", 5), image("b.png", 5), image("c.png", 5)];
        let calls = RefCell::new(0usize);

        let outcome = block_on(run_batch(
            &images,
            &schedule(),
            SubmissionMode::Manual,
            0.0,
            |_payload| {
                *calls.borrow_mut() += 1;
                let result: Result<serde_json::Value, ApiError> = if *calls.borrow() == 2 {
                    Err(ApiError::Remote("quota exceeded".into()))
                } else {
                    Ok(serde_json::json!({}))
                };
                async move { result }
            },
        ));

        assert_eq!(*calls.borrow(), 2);
        assert_eq!(outcome.submitted, 1);
        assert_eq!(outcome.state, BatchState::Aborted);
        assert_eq!(outcome.message, "quota exceeded");
    }

    #[test]
    fn transport_failure_uses_the_generic_message() {
        let images = vec![image("a.png", 5)];

        let outcome = block_on(run_batch(
            &images,
            &schedule(),
            SubmissionMode::Manual,
            0.0,
            |_payload| {
                let result: Result<serde_json::Value, ApiError> =
                    Err(ApiError::Transport("dns failure".into()));
                async move { result }
            },
        ));

        assert_eq!(outcome.state, BatchState::Aborted);
        assert_eq!(outcome.message, MSG_TRANSPORT);
    }

    #[test]
    fn empty_remote_message_falls_back() {
        let images = vec![image("a.png", 5)];

        let outcome = block_on(run_batch(
            &images,
            &schedule(),
            SubmissionMode::Manual,
            0.0,
            |_payload| {
                let result: Result<serde_json::Value, ApiError> =
                    Err(ApiError::Remote(String::new()));
                async move { result }
            },
        ));

        assert_eq!(outcome.message, MSG_REMOTE_FALLBACK);
    }

    #[test]
    fn divided_mode_sends_the_allocator_share_for_every_image() {
        // Per-image durations are stale on purpose; divided mode must ignore them.
        let images = vec![image("a.png", 999), image("b.png", 1), image("c.png", 0)];
        let sent = RefCell::new(Vec::new());

        let outcome = block_on(run_batch(
            &images,
            &schedule(),
            SubmissionMode::EquallyDivided,
            1.0,
            |payload| {
                sent.borrow_mut().push(payload.duration);
                let result: Result<serde_json::Value, ApiError> = Ok(serde_json::json!({}));
                async move { result }
            },
        ));

        assert_eq!(outcome.state, BatchState::Completed);
        assert_eq!(*sent.borrow(), vec![20, 20, 20]);
    }

    #[test]
    fn empty_batch_completes_silently() {
        let outcome = block_on(run_batch(
            &[],
            &schedule(),
            SubmissionMode::Manual,
            0.0,
            |_payload| async move { Ok(serde_json::json!({})) },
        ));

        assert_eq!(outcome.state, BatchState::Completed);
        assert_eq!(outcome.submitted, 0);
        assert!(outcome.message.is_empty());
    }
}
