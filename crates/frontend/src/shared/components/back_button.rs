use leptos::prelude::*;
use leptos_router::components::A;

/// "Back to Home" link shown on every page but the home screen
#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <div class="back-button">
            <A href="/">"← Back to Home"</A>
        </div>
    }
}
