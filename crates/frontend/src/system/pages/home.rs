use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_NAVIGATION;
use crate::system::health::api::fetch_health;

/// One card on the home screen
pub struct NavEntry {
    pub href: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        href: "/contribuinte",
        icon: "👤",
        title: "Contribuinte",
        description: "Manage contribuinte records",
    },
    NavEntry {
        href: "/upload",
        icon: "📤",
        title: "Upload",
        description: "Bulk upload contribuinte records",
    },
    NavEntry {
        href: "/e-financeira",
        icon: "💰",
        title: "e-Financeira",
        description: "Financial management system",
    },
    NavEntry {
        href: "/darf",
        icon: "📄",
        title: "DARF",
        description: "DARF document management",
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum ApiStatus {
    Checking,
    Online,
    Offline,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (api_status, set_api_status) = signal(ApiStatus::Checking);

    spawn_local(async move {
        let status = match fetch_health().await {
            Ok(h) if h.is_healthy() => ApiStatus::Online,
            Ok(h) => {
                log::warn!("backend reports status {:?}", h.status);
                ApiStatus::Offline
            }
            Err(e) => {
                log::warn!("health check failed: {}", e);
                ApiStatus::Offline
            }
        };
        // The page may be gone by the time the probe answers.
        let _ = set_api_status.try_set(status);
    });

    view! {
        <PageFrame page_id="home--navigation" category=PAGE_CAT_NAVIGATION>
            <div class="page__header">
                <h1 class="project-title">"Easy Interfaces"</h1>
                <span class=move || match api_status.get() {
                    ApiStatus::Checking => "api-status api-status--checking",
                    ApiStatus::Online => "api-status api-status--online",
                    ApiStatus::Offline => "api-status api-status--offline",
                }>
                    {move || match api_status.get() {
                        ApiStatus::Checking => "API: checking...",
                        ApiStatus::Online => "API: online",
                        ApiStatus::Offline => "API: offline",
                    }}
                </span>
            </div>

            <div class="page__content options-grid">
                {NAV_ENTRIES
                    .iter()
                    .map(|entry| view! {
                        <A href=entry.href>
                            <div class="option-card">
                                <div class="option-icon">{entry.icon}</div>
                                <h2>{entry.title}</h2>
                                <p>{entry.description}</p>
                            </div>
                        </A>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
