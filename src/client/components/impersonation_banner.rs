use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUserSecret;
use dioxus_free_icons::Icon;
use palaestra::store::TenantBinding;

/// Shows which academy an admin is acting as, with a control to stop.
#[component]
pub fn ImpersonationBanner() -> Element {
    let binding = use_context::<Signal<TenantBinding>>();

    let Some(academy_name) = binding
        .read()
        .context()
        .and_then(|context| context.academy_name.clone())
    else {
        return rsx!();
    };

    rsx!(
        div { class: "alert alert-warning py-1 flex gap-2",
            Icon {
                width: 16,
                height: 16,
                icon: FaUserSecret
            }
            span { "Acting as {academy_name}" }
            button {
                class: "btn btn-sm",
                onclick: move |_| stop(),
                "Stop"
            }
        }
    )
}

fn stop() {
    #[cfg(feature = "web")]
    spawn(async move {
        use dioxus_logger::tracing;

        use crate::client::util::api::stop_impersonation;

        match stop_impersonation().await {
            // Every tenant-scoped view must be rebuilt for the admin's own binding
            Ok(()) => {
                document::eval("window.location.reload()");
            }
            Err(err) => tracing::error!(err),
        }
    });
}
