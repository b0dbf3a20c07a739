//! # AdDisplay - scheduling and batch submission core
//!
//! Transport-agnostic core of the Ad Display portal: it models images
//! awaiting submission, computes display durations, builds the wire
//! payloads and walks a batch through the remote create endpoint one
//! request at a time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Picked file │────▶│    Codec    │────▶│  Allocator  │────▶│    Batch    │
//! │  (browser)  │     │ (≤800 JPEG) │     │ (durations) │     │ (fail-fast) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - `thiserror` error types
//! - [`pending`] - images awaiting submission
//! - [`schedule`] - shared display schedule
//! - [`allocator`] - per-image duration allocation
//! - [`payload`] - wire payload for the create endpoint
//! - [`batch`] - sequential batch submitter
//! - [`gallery`] - local mirror of the remote image store
//! - [`codec`] - resize-then-encode collaborator

pub mod error;
pub mod pending;
pub mod schedule;
pub mod allocator;
pub mod payload;
pub mod batch;
pub mod gallery;
pub mod codec;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ApiError, ApiResult, CodecError, CodecResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use pending::PendingImage;
pub use schedule::Schedule;

// =============================================================================
// Re-exports - Allocation
// =============================================================================

pub use allocator::{allocate, divided_duration, submit_blocked, SubmissionMode};

// =============================================================================
// Re-exports - Payload
// =============================================================================

pub use payload::{build_payload, AdPayload};

// =============================================================================
// Re-exports - Batch submission
// =============================================================================

pub use batch::{run_batch, BatchOutcome, BatchState};

// =============================================================================
// Re-exports - Gallery
// =============================================================================

pub use gallery::{Gallery, StoredImage};

// =============================================================================
// Re-exports - Codec
// =============================================================================

pub use codec::{decode_data_url, encode_data_url, ImageCodec, JpegCodec};
