//! UI Components for the Ad Display portal.
//!
//! # Layout Components
//! - [`Header`] - Navigation between the upload form and the gallery
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadPage`] - File intake, scheduling and batch submission
//! - [`SchedulePicker`] - Shared start/end date and time fields
//! - [`ManagePage`] - Stored-image gallery with single and bulk delete

mod header;
mod hero;
mod footer;
mod schedule;
mod upload;
mod manage;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use schedule::*;
pub use upload::*;
pub use manage::*;
