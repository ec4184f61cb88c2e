#![allow(non_snake_case)]

use dioxus::{logger::tracing::{error, warn}, prelude::*};

use crate::utils::{
  api::{ApiClient, API_BASE_URL},
  server::validate_title,
  session::Session,
};

#[component]
pub fn NewPortfolioDialog(game_title: String, mut open: Signal<bool>) -> Element {
  let session = use_context::<Session>();
  let submit_game_title = game_title.clone();

  rsx! {
    div {
      class: "dialog-overlay",
      div {
        class: "dialog",
        h2 { "Create New Portfolio in Game {game_title}" },
        form {
          id: "new-portfolio-form",
          onsubmit: move |evt: FormEvent| {
            let values = evt.values();
            let title = values.get("title").map(|v| v.as_value()).unwrap_or_default();

            if let Err(err) = validate_title("portfolio title", &title) {
              warn!("rejected portfolio creation: {err}");
              return;
            }

            let game_title = submit_game_title.clone();
            let username = (session.username)();
            spawn(async move {
              let api = ApiClient::new(reqwest::Client::new(), API_BASE_URL);
              if let Err(err) = api.create_portfolio(&game_title, &title, &username).await {
                error!("failed to create portfolio: {err}");
              }
              open.set(false);
            });
          },
          div {
            class: "form-group",
            label { class: "form-label", "Title" },
            input { class: "form-input", name: "title", r#type: "text" }
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
