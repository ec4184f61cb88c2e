#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::tradeDialog::TradeDialog;
use crate::utils::server::{holding_rows, Portfolio, SecurityType, TradeDirection};

#[component]
pub fn HoldingsDialog(game_title: String, portfolio: Portfolio, on_close: EventHandler<()>) -> Element {
  let mut trade: Signal<Option<(SecurityType, TradeDirection)>> = use_signal(|| None);

  let rows = holding_rows(&portfolio.holdings, &portfolio.options);

  rsx! {
    div {
      class: "dialog-overlay",
      div {
        class: "dialog dialog-fullscreen",
        h2 { "Holdings for Portfolio {portfolio.title}" },
        table {
          class: "data-table",
          tbody {
            tr {
              th { scope: "col", "Type" },
              th { scope: "col", "Ticker" },
              th { scope: "col", "Shares" },
              th { scope: "col", "Contract" },
              th { scope: "col", "Quantity" },
            }
            for row in rows {
              tr {
                key: "{row.id}",
                td { "{row.security}" },
                td { "{row.ticker}" },
                td { "{row.shares}" },
                td { "{row.contract}" },
                td { "{row.quantity}" },
              }
            }
          }
        },
        div {
          class: "dialog-actions",
          button {
            class: "button button-primary",
            onclick: move |_| trade.set(Some((SecurityType::Stock, TradeDirection::Buy))),
            "Buy Holding"
          },
          button {
            class: "button button-primary",
            onclick: move |_| trade.set(Some((SecurityType::Stock, TradeDirection::Sell))),
            "Sell Holding"
          },
          button {
            class: "button button-primary",
            onclick: move |_| trade.set(Some((SecurityType::Option, TradeDirection::Buy))),
            "Buy Option"
          },
          button {
            class: "button button-primary",
            onclick: move |_| trade.set(Some((SecurityType::Option, TradeDirection::Sell))),
            "Sell Option"
          },
          button { class: "button", onclick: move |_| on_close.call(()), "Close" }
        }
      }
    }
    if let Some((security, direction)) = trade() {
      TradeDialog {
        security,
        direction,
        game_title: game_title.clone(),
        portfolio_title: portfolio.title.clone(),
        on_close: move |_| trade.set(None),
      }
    }
  }
}
