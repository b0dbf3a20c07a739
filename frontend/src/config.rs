//! Application configuration.
//!
//! Centralized configuration for the Ad Display portal frontend.
//! In development these are hardcoded. In production they could be
//! loaded from environment or a config file.

/// Ad management API base URL.
pub const API_BASE_URL: &str = "https://ad-display-backend.onrender.com";

/// Longest edge of an uploaded image after re-encoding, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 800;

/// JPEG quality used when re-encoding uploads.
pub const JPEG_QUALITY: u8 = 90;

/// Characters of a filename shown in the pending list before truncation.
pub const FILENAME_DISPLAY_CHARS: usize = 15;

/// Default daily display window.
pub const DEFAULT_START_TIME: &str = "08:00:00";

/// End of the default daily display window.
pub const DEFAULT_END_TIME: &str = "18:00:00";
