//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Ad Display Portal"</h1>
            <p class="subtitle">
                "Upload ad images, assign a display schedule "
                "and push them to the display backend in batch."
            </p>
        </div>
    }
}
