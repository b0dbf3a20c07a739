//! Display schedule shared by every image in a submission batch.

/// Start/end dates and times as plain `YYYY-MM-DD` / `HH:MM:SS` strings.
///
/// The backend owns validation; values pass through to the wire exactly as
/// entered. The only client-side check is presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
}

impl Schedule {
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// True when all four fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.start_date.is_empty()
            && !self.end_date.is_empty()
            && !self.start_time.is_empty()
            && !self.end_time.is_empty()
    }
}
