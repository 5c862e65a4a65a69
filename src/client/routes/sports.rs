use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaXmark};
use dioxus_free_icons::Icon;
use palaestra::{
    model::{api::FieldErrorDto, sport::SportDto},
    store::SportStore,
};

use crate::client::components::Page;

#[component]
pub fn Sports() -> Element {
    let store = use_context::<Signal<SportStore>>();
    let error = use_signal(|| None::<FieldErrorDto>);
    let loading = use_signal(|| false);

    // Load the bound academy's sports once per binding
    use_effect(move || load(store, error, loading));

    let pending = store.read().is_pending();
    let fetched = store.read().is_fetched();
    let items = store.read().items().to_vec();
    let candidates = store.read().candidates().to_vec();

    rsx!(
        Title { "Sports | Palaestra" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] p-6 flex flex-col gap-4",
                if let Some(err) = error.read().as_ref() {
                    div { role: "alert", class: "alert alert-error flex justify-between",
                        span { "{err.error}" }
                        if !fetched {
                            button {
                                class: "btn btn-sm",
                                disabled: loading(),
                                onclick: move |_| load(store, error, loading),
                                "Retry"
                            }
                        }
                    }
                }
                if !fetched {
                    div { class: "skeleton h-32 w-full" }
                } else {
                    div { class: "flex flex-wrap gap-4",
                        SportList {
                            title: "Selected sports",
                            sports: items,
                            pending: pending,
                            action: SportAction::Remove,
                            error: error,
                        }
                        SportList {
                            title: "Available sports",
                            sports: candidates,
                            pending: pending,
                            action: SportAction::Add,
                            error: error,
                        }
                    }
                }
            }
        }
    )
}

#[derive(Clone, Copy, PartialEq)]
enum SportAction {
    Add,
    Remove,
}

#[component]
fn SportList(
    title: &'static str,
    sports: Vec<SportDto>,
    pending: bool,
    action: SportAction,
    error: Signal<Option<FieldErrorDto>>,
) -> Element {
    let store = use_context::<Signal<SportStore>>();

    rsx!(
        div { class: "card shadow-sm flex-1 min-w-72",
            div { class: "card-body",
                h2 { class: "card-title", "{title}" }
                if sports.is_empty() {
                    p { class: "text-sm", "None" }
                }
                ul { class: "flex flex-col gap-2",
                    {sports.into_iter().map(|sport| {
                        let id = sport.id;
                        let name = sport.name.clone();
                        let (label, icon) = match action {
                            SportAction::Add => ("Add", rsx!(Icon { width: 12, height: 12, icon: FaPlus })),
                            SportAction::Remove => ("Remove", rsx!(Icon { width: 12, height: 12, icon: FaXmark })),
                        };

                        rsx! {
                            li { key: "{id}", class: "flex items-center justify-between",
                                span { "{name}" }
                                button {
                                    class: "btn btn-sm btn-outline flex gap-2",
                                    // Mutations against the store are serialized
                                    disabled: pending,
                                    onclick: move |_| mutate(store, error, action, sport.clone()),
                                    {icon}
                                    "{label}"
                                }
                            }
                        }
                    })}
                }
            }
        }
    )
}

/// Fetches the bound academy's sports unless already fetched or a load is running.
///
/// A failed load leaves the store unfetched, so calling this again retries.
fn load(
    store: Signal<SportStore>,
    mut error: Signal<Option<FieldErrorDto>>,
    mut loading: Signal<bool>,
) {
    let Some(ticket) = store.read().begin_fetch() else {
        return;
    };
    if *loading.peek() {
        return;
    }

    loading.set(true);
    error.set(None);

    #[cfg(feature = "web")]
    spawn(async move {
        use palaestra::store::CollectionApi;

        use crate::client::util::api::SportApi;

        let mut store = store;

        let items = SportApi.fetch_items().await;
        let candidates = SportApi.fetch_candidates().await;

        match (items, candidates) {
            (Ok(items), Ok(candidates)) => {
                store.write().apply_fetch(ticket, items, candidates);
            }
            (Err(err), _) | (_, Err(err)) => error.set(Some(err)),
        }
        loading.set(false);
    });

    #[cfg(not(feature = "web"))]
    {
        let _ = ticket;
        error.set(Some(FieldErrorDto {
            error: "Sports can only be loaded from the browser".to_string(),
            field: None,
        }));
        loading.set(false);
    }
}

/// Applies the change to the store at once and settles it with the server's verdict.
fn mutate(
    mut store: Signal<SportStore>,
    mut error: Signal<Option<FieldErrorDto>>,
    action: SportAction,
    sport: SportDto,
) {
    let pending = match action {
        SportAction::Add => store.write().begin_add(&[sport.id]),
        SportAction::Remove => store.write().begin_remove(std::slice::from_ref(&sport)),
    };
    let Some(pending) = pending else {
        return;
    };

    error.set(None);

    #[cfg(feature = "web")]
    spawn(async move {
        use palaestra::store::CollectionApi;

        use crate::client::util::api::SportApi;

        let result = match action {
            SportAction::Add => SportApi.add(pending.ids()).await,
            SportAction::Remove => SportApi.remove(pending.ids()).await,
        };

        if let Err(err) = store.write().settle(pending, result) {
            error.set(Some(err));
        }
    });

    #[cfg(not(feature = "web"))]
    if let Err(err) = store.write().settle(
        pending,
        Err(FieldErrorDto {
            error: "Sports can only be changed from the browser".to_string(),
            field: None,
        }),
    ) {
        error.set(Some(err));
    }
}
