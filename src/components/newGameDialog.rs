#![allow(non_snake_case)]

use dioxus::{logger::tracing::{error, warn}, prelude::*};

use crate::utils::{
  api::{ApiClient, API_BASE_URL},
  server::validate_title,
};

#[component]
pub fn NewGameDialog(mut open: Signal<bool>, on_created: EventHandler<()>) -> Element {
  rsx! {
    div {
      class: "dialog-overlay",
      div {
        class: "dialog",
        h2 { "Create New Game" },
        form {
          id: "new-game-form",
          onsubmit: move |evt: FormEvent| {
            let values = evt.values();
            let title = values.get("title").map(|v| v.as_value()).unwrap_or_default();
            let starting_balance =
              values.get("starting_balance").map(|v| v.as_value()).unwrap_or_default();
            let rules = values.get("rules").map(|v| v.as_value()).unwrap_or_default();

            // an empty title would end up as an empty path segment, so the
            // dialog stays open until there is one
            if let Err(err) = validate_title("game title", &title) {
              warn!("rejected game creation: {err}");
              return;
            }

            spawn(async move {
              let api = ApiClient::new(reqwest::Client::new(), API_BASE_URL);
              match api.create_game(&title, &starting_balance, &rules).await {
                Ok(()) => on_created.call(()),
                Err(err) => error!("failed to create game: {err}"),
              }
              // closes on failure too, matching the save flow elsewhere
              open.set(false);
            });
          },
          div {
            class: "form-group",
            label { class: "form-label", "Name" },
            input { class: "form-input", name: "title", r#type: "text" }
          },
          div {
            class: "form-group",
            label { class: "form-label", "Starting Balance" },
            input { class: "form-input", name: "starting_balance", r#type: "number", min: "0", step: "0.01" }
          },
          div {
            class: "form-group",
            label { class: "form-label", "Rules" },
            input { class: "form-input", name: "rules", r#type: "text" }
          },
          div {
            class: "form-actions",
            button { r#type: "submit", class: "button button-primary", "Save" },
            button {
              r#type: "button",
              class: "button",
              onclick: move |_| open.set(false),
              "Cancel"
            }
          }
        }
      }
    }
  }
}
