use leptos::prelude::*;

use crate::shared::components::back_button::BackButton;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PLACEHOLDER;

/// Placeholder for modules that are linked from home but not built yet
#[component]
pub fn WorkInProgressPage(title: &'static str) -> impl IntoView {
    view! {
        <PageFrame page_id="work_in_progress--placeholder" category=PAGE_CAT_PLACEHOLDER>
            <div class="work-icon">"🚧"</div>
            <h1>{title}</h1>
            <p class="work-message">"Working in progress..."</p>
            <BackButton />
        </PageFrame>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--placeholder" category=PAGE_CAT_PLACEHOLDER>
            <h1>"Page not found"</h1>
            <BackButton />
        </PageFrame>
    }
}
