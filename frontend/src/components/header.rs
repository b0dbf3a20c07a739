use leptos::*;
use leptos_router::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">"AD DISPLAY"</A>
            </div>
            <nav class="header-right">
                <A href="/" class="nav-link">"Upload"</A>
                <A href="/manage" class="nav-link">"Manage Images"</A>
            </nav>
        </header>
    }
}
