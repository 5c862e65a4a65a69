use dioxus::prelude::*;
use palaestra::store::{SportStore, TenantBinding};

use crate::client::{components::Navbar, router::Route};

/// Layout of every tenant-scoped page.
///
/// Resolves the tenant context on each navigation and only renders its pages once that
/// resolution completed with a bound session; otherwise the browser is sent to the sign-in
/// route. The sport store is provided here and rebound whenever the resolved academy changes,
/// which drops the previous tenant's data.
#[component]
pub fn TenantLayout() -> Element {
    let binding = use_context_provider(|| Signal::new(TenantBinding::new()));
    use_context_provider(|| Signal::new(SportStore::new()));

    #[cfg(feature = "web")]
    {
        let route = use_route::<Route>();
        let sport_store = use_context::<Signal<SportStore>>();

        let _ = use_resource(use_reactive((&route,), move |(route,)| async move {
            use dioxus_logger::tracing;
            use palaestra::model::tenant::{TenantArea, SIGN_IN_ROUTE};

            use crate::client::util::api::get_tenant_context;

            let mut binding = binding;
            let mut sport_store = sport_store;

            tracing::debug!(?route, "Resolving tenant context");

            // Pages stay unmounted until this navigation is resolved
            let ticket = binding.write().begin_resolution();

            match get_tenant_context(TenantArea::Academy).await {
                Ok(resolved) => {
                    if let (true, Some(redirect_to)) =
                        (resolved.should_redirect, resolved.redirect_to.as_deref())
                    {
                        redirect(redirect_to);
                    }

                    let mut store = sport_store.write();
                    binding.write().complete(ticket, resolved, &mut *store);
                }
                Err(err) => {
                    tracing::error!(err);
                    redirect(SIGN_IN_ROUTE);
                }
            }
        }));
    }

    let renders = binding.read().renders();

    rsx! {
        Navbar {}
        if renders {
            Outlet::<Route> {}
        } else {
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        }
    }
}

#[cfg(feature = "web")]
fn redirect(to: &str) {
    document::eval(&format!("window.location.replace({:?})", to));
}
