use desktop_runtime::{DesktopProvider, DesktopShell, WindowId};
use leptos::logging::warn;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::{build_host_services, WebMessageDispatchConfig};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop Portfolio" />
        <Meta name="description" content="A retro desktop-style portfolio shell." />
        <Meta name="viewport" content="width=device-width, initial-scale=1, viewport-fit=cover" />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

/// Resolves a `?open=` value, logging tokens that name no window.
pub fn launch_target(raw: Option<&str>) -> Option<WindowId> {
    let raw = raw?;
    match raw.parse::<WindowId>() {
        Ok(window_id) => Some(window_id),
        Err(err) => {
            warn!("ignoring deep link: {err}");
            None
        }
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let launch = query.with_untracked(|map| launch_target(map.get("open").map(String::as_str)));
    let host_services = build_host_services(WebMessageDispatchConfig::default());

    view! {
        <DesktopProvider host_services>
            <DesktopShell launch=launch />
        </DesktopProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_link_resolves_known_windows_only() {
        assert_eq!(launch_target(Some("snake")), Some(WindowId::Snake));
        assert_eq!(launch_target(Some("paint")), None);
        assert_eq!(launch_target(None), None);
    }
}
