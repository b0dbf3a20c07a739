//! Gallery page: list, select and delete stored images.
//!
//! The page mirrors the remote store through [`Gallery`]; the mirror is
//! mutated only after a delete call reports success.

use addisplay::{ApiError, Gallery, StoredImage};
use leptos::*;

use crate::services::api;
use crate::types::StatusMessage;

/// One status line for a failed fetch: transport failures collapse into a
/// fixed message, remote failures surface verbatim.
fn fetch_error_text(err: ApiError) -> String {
    match err {
        ApiError::Remote(message) => message,
        ApiError::Transport(_) => "Failed to fetch images.".to_string(),
    }
}

#[component]
pub fn ManagePage() -> impl IntoView {
    let gallery = create_rw_signal(Gallery::new());
    let (loaded, set_loaded) = create_signal(false);
    let (message, set_message) = create_signal(None::<StatusMessage>);

    // Fetch the snapshot once when the page mounts.
    spawn_local(async move {
        match api::list_images().await {
            Ok(images) => {
                log::info!("🗂️ {} stored images fetched", images.len());
                gallery.update(|g| g.set_snapshot(images));
            }
            Err(err) => {
                log::error!("❌ Failed to fetch gallery: {err}");
                set_message.set(Some(StatusMessage::error(fetch_error_text(err))));
            }
        }
        set_loaded.set(true);
    });

    let on_delete = move |public_id: String| {
        spawn_local(async move {
            match api::delete_image(&public_id).await {
                Ok(()) => {
                    gallery.update(|g| g.remove(std::slice::from_ref(&public_id)));
                    set_message.set(Some(StatusMessage::success(format!(
                        "Image with Public ID {public_id} deleted successfully!"
                    ))));
                }
                Err(err) => {
                    // Failed delete: the mirror stays untouched.
                    log::error!("❌ Delete failed for {public_id}: {err}");
                    set_message.set(Some(StatusMessage::error(err.to_string())));
                }
            }
        });
    };

    let on_bulk_delete = move |_| {
        let ids = gallery.with_untracked(|g| g.selected_ids().to_vec());
        if ids.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::delete_images(&ids).await {
                Ok(()) => {
                    log::info!("🗑️ {} images deleted", ids.len());
                    gallery.update(|g| g.remove(&ids));
                    set_message.set(Some(StatusMessage::success(
                        "Selected images deleted successfully!",
                    )));
                }
                Err(err) => {
                    log::error!("❌ Bulk delete failed: {err}");
                    set_message.set(Some(StatusMessage::error(err.to_string())));
                }
            }
        });
    };

    view! {
        <div class="container">
            <h1>"Manage Stored Images"</h1>

            <Show
                when=move || loaded.get() && !gallery.with(|g| g.is_empty())
                fallback=move || {
                    view! {
                        <Show when=move || loaded.get() fallback=|| view! { }>
                            <p class="empty-state">"No images found in Cloudinary."</p>
                        </Show>
                    }
                }
            >
                <button
                    class="btn btn-danger"
                    on:click=on_bulk_delete
                    disabled=move || !gallery.with(|g| g.has_selection())
                >
                    "Delete Selected Images"
                </button>

                <table class="gallery-table">
                    <thead>
                        <tr>
                            <th>
                                <input
                                    type="checkbox"
                                    prop:checked=move || gallery.with(|g| g.all_selected())
                                    on:change=move |_| gallery.update(|g| g.toggle_select_all())
                                />
                            </th>
                            <th>"Preview"</th>
                            <th>"Public ID"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || gallery.with(|g| g.images().to_vec())
                            key=|image| image.public_id.clone()
                            children=move |image: StoredImage| {
                                let public_id = image.public_id.clone();
                                let select_id = public_id.clone();
                                let delete_id = public_id.clone();
                                let checked_id = public_id.clone();

                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    gallery.with(|g| g.is_selected(&checked_id))
                                                }
                                                on:change=move |_| {
                                                    gallery.update(|g| g.toggle_select(&select_id))
                                                }
                                            />
                                        </td>
                                        <td>
                                            <img class="gallery-thumb" src=image.url.clone() alt=public_id.clone()/>
                                        </td>
                                        <td class="gallery-id">{public_id.clone()}</td>
                                        <td>
                                            <button
                                                class="btn btn-danger"
                                                on:click=move |_| on_delete(delete_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Show
                when=move || message.get().is_some()
                fallback=|| view! { }
            >
                <div class=move || {
                    format!(
                        "status-message {}",
                        message.get().map(|m| m.kind.css_class()).unwrap_or_default()
                    )
                }>
                    {move || message.get().map(|m| m.text).unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
