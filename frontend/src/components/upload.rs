//! Upload page: file intake, scheduling and batch submission.
//!
//! Owns the pending set. Picked files are read and normalized through the
//! codec, scheduled with one shared [`Schedule`], and submitted one request
//! at a time by the core batch submitter.

use addisplay::batch::{run_batch, BatchState};
use addisplay::{divided_duration, submit_blocked, PendingImage, SubmissionMode};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::components::{default_schedule, Hero, SchedulePicker};
use crate::config::FILENAME_DISPLAY_CHARS;
use crate::services::{api, files};
use crate::types::StatusMessage;

#[component]
pub fn UploadPage() -> impl IntoView {
    let pending = create_rw_signal(Vec::<PendingImage>::new());
    let schedule = create_rw_signal(default_schedule());
    let (divide_time, set_divide_time) = create_signal(false);
    let (total_minutes, set_total_minutes) = create_signal(String::new());
    let (batch_state, set_batch_state) = create_signal(BatchState::Idle);
    let (status, set_status) = create_signal(None::<StatusMessage>);

    let parsed_minutes = move || total_minutes.get().parse::<f64>().unwrap_or(0.0);
    let mode = move || {
        if divide_time.get() {
            SubmissionMode::EquallyDivided
        } else {
            SubmissionMode::Manual
        }
    };
    let is_submitting = move || batch_state.get() == BatchState::Submitting;
    let divided_preview = move || divided_duration(pending.get().len(), parsed_minutes());

    // Handler pour la sélection de fichiers
    let on_files_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file_list) = input.files() else { return };

        let mut picked = Vec::new();
        for i in 0..file_list.length() {
            if let Some(file) = file_list.get(i) {
                picked.push(file);
            }
        }
        if picked.is_empty() {
            return;
        }

        set_status.set(None);

        spawn_local(async move {
            let mut images = Vec::new();
            for file in picked {
                match files::read_pending_image(file).await {
                    Ok(image) => images.push(image),
                    Err(e) => {
                        log::warn!("⚠️ Skipping file: {e}");
                        set_status.set(Some(StatusMessage::error(e)));
                    }
                }
            }
            log::info!("📋 {} images pending", images.len());
            // A fresh selection replaces the previous pending set.
            pending.set(images);
        });
    };

    let on_duration_change = move |index: usize, raw: String| {
        let duration = raw.parse::<u32>().unwrap_or(0);
        pending.update(|images| {
            if let Some(image) = images.get_mut(index) {
                image.duration_secs = duration;
            }
        });
    };

    let on_remove = move |index: usize| {
        pending.update(|images| {
            if index < images.len() {
                images.remove(index);
            }
        });
    };

    let submit_disabled = move || {
        is_submitting()
            || pending.get().is_empty()
            || !schedule.get().is_complete()
            || submit_blocked(mode(), &pending.get())
    };

    let on_submit = move |_| {
        let images = pending.get_untracked();
        if images.is_empty() {
            return;
        }
        let batch_schedule = schedule.get_untracked();
        let batch_mode = mode();
        let minutes = parsed_minutes();

        set_status.set(None);
        set_batch_state.set(BatchState::Submitting);

        spawn_local(async move {
            log::info!("📤 Submitting batch of {} images...", images.len());

            let outcome = run_batch(
                &images,
                &batch_schedule,
                batch_mode,
                minutes,
                |payload| async move { api::create_ad(&payload).await },
            )
            .await;

            match outcome.state {
                BatchState::Aborted => {
                    log::error!(
                        "❌ Batch aborted after {} images: {}",
                        outcome.submitted,
                        outcome.message
                    );
                    set_status.set(Some(StatusMessage::error(outcome.message.clone())));
                }
                _ => {
                    log::info!("✅ {} images submitted", outcome.submitted);
                    if !outcome.message.is_empty() {
                        set_status.set(Some(StatusMessage::success(outcome.message.clone())));
                    }
                }
            }

            // Clear slate: the pending set is discarded on any terminal
            // state, even when fail-fast left images unsent.
            pending.set(Vec::new());
            set_batch_state.set(outcome.state);
        });
    };

    // Handler pour cliquer sur la zone entière
    let trigger_file_input = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id("fileInput") {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    view! {
        <div class="container">
            <Hero/>

            <div class="upload-section" id="uploadZone" on:click=trigger_file_input>
                <div class="upload-icon">"🖼️"</div>
                <div class="upload-text">"Drop ad images here"</div>
                <div class="upload-hint">"or click to select (multiple files supported)"</div>

                <input
                    type="file"
                    id="fileInput"
                    multiple=true
                    accept="image/*"
                    style="display:none"
                    on:change=on_files_change
                />

                <label for="fileInput" class="upload-button">
                    "Choose images"
                </label>
            </div>

            <Show
                when=move || !pending.get().is_empty()
                fallback=|| view! { }
            >
                <SchedulePicker schedule=schedule/>

                <div class="divide-section">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || divide_time.get()
                            on:change=move |ev| set_divide_time.set(event_target_checked(&ev))
                        />
                        " Divide time duration equally"
                    </label>

                    <Show
                        when=move || divide_time.get()
                        fallback=|| view! { }
                    >
                        <div class="total-duration">
                            <label>
                                "Total duration (in minutes): "
                                <input
                                    type="number"
                                    min="0"
                                    prop:value=move || total_minutes.get()
                                    on:input=move |ev| set_total_minutes.set(event_target_value(&ev))
                                />
                            </label>
                            <span class="divided-preview">
                                {move || format!("{} s per image", divided_preview())}
                            </span>
                        </div>
                    </Show>
                </div>

                <div class="pending-section">
                    <h3>"Uploaded Images"</h3>
                    <For
                        each=move || (0..pending.get().len())
                        key=|index| *index
                        children=move |index| {
                            let name = move || {
                                pending.with(|images| {
                                    images
                                        .get(index)
                                        .map(|image| image.display_name(FILENAME_DISPLAY_CHARS))
                                        .unwrap_or_default()
                                })
                            };
                            let thumb = move || {
                                pending.with(|images| {
                                    images
                                        .get(index)
                                        .map(|image| image.data_url.clone())
                                        .unwrap_or_default()
                                })
                            };
                            // Divided mode shows the computed share, read-only.
                            let shown_duration = move || {
                                if divide_time.get() {
                                    divided_preview().to_string()
                                } else {
                                    pending
                                        .with(|images| {
                                            images.get(index).map(|image| image.duration_secs)
                                        })
                                        .unwrap_or(0)
                                        .to_string()
                                }
                            };

                            view! {
                                <div class="pending-item">
                                    <img class="pending-thumb" src=thumb alt=name/>
                                    <span class="pending-name">{name}</span>
                                    <input
                                        type="number"
                                        min="0"
                                        class="pending-duration"
                                        prop:disabled=move || divide_time.get()
                                        prop:value=shown_duration
                                        on:input=move |ev| on_duration_change(index, event_target_value(&ev))
                                    />
                                    <button
                                        class="btn btn-danger"
                                        on:click=move |_| on_remove(index)
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="submit-row">
                    <button
                        class="btn btn-primary"
                        on:click=on_submit
                        disabled=submit_disabled
                    >
                        {move || if is_submitting() { "Uploading..." } else { "Submit" }}
                    </button>
                </div>
            </Show>

            <Show
                when=move || status.get().is_some()
                fallback=|| view! { }
            >
                <div class=move || {
                    format!(
                        "status-message {}",
                        status.get().map(|s| s.kind.css_class()).unwrap_or_default()
                    )
                }>
                    {move || status.get().map(|s| s.text).unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
