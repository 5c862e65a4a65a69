use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use palaestra::{model::tenant::AcademyStatusDto, store::TenantBinding};

use crate::client::{components::Page, router::Route};

#[component]
pub fn Home() -> Element {
    let binding = use_context::<Signal<TenantBinding>>();
    let context = binding.read().context().cloned().unwrap_or_default();

    let status = match context.status {
        Some(AcademyStatusDto::Pending) => "Pending review",
        Some(AcademyStatusDto::Approved) => "Approved",
        Some(AcademyStatusDto::Rejected) => "Rejected",
        None => "No academy",
    };

    rsx!(
        Title { "Home | Palaestra" }
        Meta {
            name: "description",
            content: "Academy management console."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title",
                        {context.academy_name.clone().unwrap_or_else(|| "Your academy".to_string())}
                    }
                    if context.academy_id.is_some() {
                        p { "Status: {status}" }
                        if context.is_onboarded == Some(false) {
                            p { class: "text-warning", "Onboarding has not been completed yet." }
                        }
                        Link { to: Route::Sports {}, class: "btn btn-primary", "Manage sports" }
                    } else if context.is_admin {
                        p { "Pick an academy to act as from the admin console." }
                    }
                }
            }
        }
    )
}
