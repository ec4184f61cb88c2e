#![allow(non_snake_case)]

use dioxus::{logger::tracing::error, prelude::*};

use crate::components::holdingsDialog::HoldingsDialog;
use crate::components::newPortfolioDialog::NewPortfolioDialog;
use crate::utils::{
  api::{ApiClient, API_BASE_URL},
  server::{Portfolio, NOT_APPLICABLE},
};

#[component]
pub fn PortfoliosDialog(
  game_title: String,
  portfolios: Vec<Portfolio>,
  on_close: EventHandler<()>,
) -> Element {
  let mut new_portfolio_open = use_signal(|| false);
  // full portfolio detail fetched on row activation, holdings included
  let mut inspected: Signal<Option<Portfolio>> = use_signal(|| None);

  rsx! {
    div {
      class: "dialog-overlay",
      div {
        class: "dialog dialog-fullscreen",
        h2 { "Portfolios for Game {game_title}" },
        table {
          class: "data-table",
          tbody {
            tr {
              th { scope: "col", "Ranking" },
              th { scope: "col", "Portfolio Title" },
              th { scope: "col", "Owner" },
              th { scope: "col", "Total Value" },
              th { scope: "col", "Cash Balance" },
            }
            for portfolio in portfolios {
              {
                let row_title = portfolio.title.clone();
                let row_game = game_title.clone();
                let owner = portfolio
                  .owner
                  .as_ref()
                  .map(|o| o.username.clone())
                  .unwrap_or_else(|| NOT_APPLICABLE.to_string());
                rsx! {
                  tr {
                    key: "{portfolio.uid}",
                    ondoubleclick: move |_| {
                      let game_title = row_game.clone();
                      let portfolio_title = row_title.clone();
                      spawn(async move {
                        let api = ApiClient::new(reqwest::Client::new(), API_BASE_URL);
                        match api.fetch_portfolio(&game_title, &portfolio_title).await {
                          Ok(detail) => inspected.set(Some(detail)),
                          Err(err) => error!("failed to fetch portfolio {portfolio_title}: {err}"),
                        }
                      });
                    },
                    td { "{portfolio.game_rank}" },
                    td { "{portfolio.title}" },
                    td { "{owner}" },
                    td { "{portfolio.total_value}" },
                    td { "{portfolio.cash_balance}" },
                  }
                }
              }
            }
          }
        },
        div {
          class: "dialog-actions",
          button {
            class: "button button-primary",
            onclick: move |_| new_portfolio_open.set(true),
            "Create New Portfolio"
          },
          button { class: "button", onclick: move |_| on_close.call(()), "Close" }
        }
      }
    }
    if new_portfolio_open() {
      NewPortfolioDialog { game_title: game_title.clone(), open: new_portfolio_open }
    }
    if let Some(portfolio) = inspected() {
      HoldingsDialog {
        game_title: game_title.clone(),
        portfolio,
        on_close: move |_| inspected.set(None),
      }
    }
  }
}
