#![allow(non_snake_case)]

use dioxus::{logger::tracing::{error, warn}, prelude::*};

use crate::utils::{
  api::{ApiClient, API_BASE_URL},
  server::{build_trade, SecurityType, TradeDirection},
};

#[component]
pub fn TradeDialog(
  security: SecurityType,
  direction: TradeDirection,
  game_title: String,
  portfolio_title: String,
  on_close: EventHandler<()>,
) -> Element {
  let symbol_label = match security {
    SecurityType::Stock => "Ticker",
    SecurityType::Option => "Contract",
  };
  let quantity_label = match security {
    SecurityType::Stock => "Shares",
    SecurityType::Option => "Quantity",
  };

  let submit_game_title = game_title.clone();
  let submit_portfolio_title = portfolio_title.clone();
  let submit = move |evt: FormEvent| {
    let values = evt.values();
    let symbol = values.get("symbol").map(|v| v.as_value()).unwrap_or_default();
    let quantity = values.get("quantity").map(|v| v.as_value()).unwrap_or_default();
    let exercise = values
      .get("exercise")
      .map_or(false, |v| v.as_value().parse::<bool>().unwrap_or(false));

    match build_trade(
      security,
      direction,
      &submit_game_title,
      &submit_portfolio_title,
      &symbol,
      &quantity,
      exercise,
    ) {
      Ok(trade) => {
        spawn(async move {
          let api = ApiClient::new(reqwest::Client::new(), API_BASE_URL);
          if let Err(err) = api.submit_trade(&trade).await {
            error!("trade failed: {err}");
          }
          // the dialog closes whether or not the trade went through
          on_close.call(());
        });
      }
      Err(err) => warn!("rejected trade input: {err}"),
    }
  };

  rsx! {
    div {
      class: "dialog-overlay",
      div {
        class: "dialog",
        h2 { "{direction} {security} for Portfolio {portfolio_title} in Game {game_title}" },
        form {
          id: "trade-form",
          onsubmit: submit,
          div {
            class: "form-group",
            label { class: "form-label", "{symbol_label}" },
            input { class: "form-input", name: "symbol", r#type: "text" }
          },
          div {
            class: "form-group",
            label { class: "form-label", "{quantity_label}" },
            input { class: "form-input", name: "quantity", r#type: "number", step: "1" }
          },
          if security == SecurityType::Stock {
            div {
              class: "form-group",
              label { class: "form-label", "Exercise" },
              input { name: "exercise", r#type: "checkbox", value: "true" }
            }
          }
          div {
            class: "form-actions",
            button { r#type: "submit", class: "button button-primary", "{direction}" },
            button {
              r#type: "button",
              class: "button",
              onclick: move |_| on_close.call(()),
              "Cancel"
            }
          }
        }
      }
    }
  }
}
