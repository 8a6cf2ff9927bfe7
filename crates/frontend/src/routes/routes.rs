use crate::domain::a001_contribuinte::ui::list::ContribuinteList;
use crate::system::pages::home::HomePage;
use crate::system::pages::work_in_progress::{NotFoundPage, WorkInProgressPage};
use crate::usecases::u501_bulk_upload::view::BulkUploadWidget;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Every path registered in [`AppRoutes`]
pub const ROUTE_PATHS: &[&str] = &["/", "/contribuinte", "/upload", "/e-financeira", "/darf"];

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/contribuinte") view=ContribuinteList />
                    <Route path=path!("/upload") view=BulkUploadWidget />
                    <Route
                        path=path!("/e-financeira")
                        view=|| view! { <WorkInProgressPage title="e-Financeira" /> }
                    />
                    <Route
                        path=path!("/darf")
                        view=|| view! { <WorkInProgressPage title="DARF" /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::pages::home::NAV_ENTRIES;

    #[test]
    fn test_route_paths_are_registered() {
        let source = include_str!("routes.rs");
        for p in ROUTE_PATHS {
            let needle = format!("path=path!(\"{}\")", p);
            assert!(source.contains(&needle), "route {} not registered", p);
        }
    }

    #[test]
    fn test_home_cards_link_to_routes() {
        for entry in NAV_ENTRIES {
            assert!(ROUTE_PATHS.contains(&entry.href), "no route for {}", entry.href);
        }
        assert_eq!(NAV_ENTRIES.len(), ROUTE_PATHS.len() - 1);
    }
}
