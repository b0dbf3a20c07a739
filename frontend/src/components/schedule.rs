//! Shared date/time schedule fields.
//!
//! One [`Schedule`] covers every image in the batch; the four inputs write
//! straight into the signal the upload page owns.

use addisplay::Schedule;
use leptos::*;

use crate::config::{DEFAULT_END_TIME, DEFAULT_START_TIME};

/// Schedule prefilled with today's date and the default display window.
pub fn default_schedule() -> Schedule {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    Schedule::new(today.clone(), today, DEFAULT_START_TIME, DEFAULT_END_TIME)
}

#[component]
pub fn SchedulePicker(schedule: RwSignal<Schedule>) -> impl IntoView {
    view! {
        <div class="schedule-section">
            <h3>"Display Schedule"</h3>
            <div class="schedule-grid">
                <label class="schedule-field">
                    "Start date"
                    <input
                        type="date"
                        prop:value=move || schedule.get().start_date
                        on:input=move |ev| schedule.update(|s| s.start_date = event_target_value(&ev))
                    />
                </label>
                <label class="schedule-field">
                    "End date"
                    <input
                        type="date"
                        prop:value=move || schedule.get().end_date
                        on:input=move |ev| schedule.update(|s| s.end_date = event_target_value(&ev))
                    />
                </label>
                <label class="schedule-field">
                    "Start time"
                    <input
                        type="time"
                        step="1"
                        prop:value=move || schedule.get().start_time
                        on:input=move |ev| schedule.update(|s| s.start_time = event_target_value(&ev))
                    />
                </label>
                <label class="schedule-field">
                    "End time"
                    <input
                        type="time"
                        step="1"
                        prop:value=move || schedule.get().end_time
                        on:input=move |ev| schedule.update(|s| s.end_time = event_target_value(&ev))
                    />
                </label>
            </div>
        </div>
    }
}
