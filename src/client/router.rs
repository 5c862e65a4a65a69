use dioxus::prelude::*;

use crate::client::{
    components::TenantLayout,
    routes::{Home, NotFound, Sports},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(TenantLayout)]

    #[route("/")]
    Home {},

    #[route("/sports")]
    Sports {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
