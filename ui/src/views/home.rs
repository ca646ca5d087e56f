use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::card::{CardExportPanel, StatsCard};
use crate::profile::{client, LookupState};

#[derive(Debug, Clone)]
enum LookupEvent {
    Submit,
}

#[component]
pub fn Home() -> Element {
    let mut lookup = use_signal(LookupState::default);

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<LookupEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                LookupEvent::Submit => start_lookup(lookup),
            }
        }
    });

    let state = lookup();

    rsx! {
        section { class: "page page-home",
            h1 { class: "page-home__title", "LeetCode User Profile" }
            p { class: "page-home__tagline",
                "Look up a public LeetCode profile and share it as a card."
            }

            form {
                class: "lookup-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    coroutine.send(LookupEvent::Submit);
                },
                input {
                    r#type: "text",
                    class: "lookup-form__input",
                    placeholder: "Enter LeetCode username",
                    value: "{state.query}",
                    oninput: move |evt| lookup.with_mut(|state| state.set_query(evt.value())),
                }
                button { r#type: "submit", class: "button button--primary", "Search" }
            }

            if state.loading {
                p { class: "lookup-status", "Loading…" }
            }

            if let Some(err) = state.error.as_ref() {
                p { class: "lookup-error", {err.user_message()} }
            }

            if let Some(stats) = state.stats.clone() {
                div { class: "page-home__card",
                    StatsCard { stats: stats.clone(), username: state.query.clone() }
                    CardExportPanel { stats, username: state.query.clone() }
                }
            }
        }
    }
}

/// Kick off one lookup as a detached task.
///
/// The fetch runs outside the coroutine loop so a new submission never
/// queues behind an in-flight one; the ticket issued by `begin_submit`
/// lets the state container discard whichever request got superseded.
fn start_lookup(mut lookup: Signal<LookupState>) {
    let submitted = lookup.with_mut(|state| {
        state
            .begin_submit()
            .map(|ticket| (ticket, state.query.clone()))
    });
    let Some((ticket, username)) = submitted else {
        return;
    };

    spawn(async move {
        let outcome = client::fetch_solved(&username).await;
        lookup.with_mut(|state| match outcome {
            Ok(stats) => state.resolve_success(ticket, stats),
            Err(err) => state.resolve_failure(ticket, err),
        });
    });
}
