use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::{components::ImpersonationBanner, router::Route};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Palaestra"
                        }
                        p { class: "text-xs",
                            "v0.1.0.Alpha-1"
                        }
                    }
                }
                ul { class: "menu menu-horizontal px-1",
                    li {
                        Link { to: Route::Sports {}, "Sports" }
                    }
                }
            }
            div {
                class: "navbar-end flex gap-2",
                ImpersonationBanner {}
                a { href: "/api/auth/logout",
                    button {
                        class: "btn btn-outline flex gap-2",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaRightFromBracket
                        }
                        "Logout"
                    }
                }
            }
        }
    }
}
