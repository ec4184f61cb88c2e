#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::portfoliosDialog::PortfoliosDialog;
use crate::utils::server::{portfolios_for_game, Game, NOT_APPLICABLE};

#[component]
pub fn GameTable(games: Vec<Game>) -> Element {
  let mut selected: Signal<Option<String>> = use_signal(|| None);

  rsx! {
    table {
      class: "data-table",
      tbody {
        tr {
          th { scope: "col", "Title" },
          th { scope: "col", "Starting Balance" },
          th { scope: "col", "Winner" },
          th { scope: "col", "Start Date" },
          th { scope: "col", "Rules" },
        }
        for game in games.clone() {
          {
            let title = game.title.clone();
            let row_title = game.title.clone();
            let starting_balance = game.starting_balance.to_string();
            let winner = game.winner.clone().unwrap_or_else(|| NOT_APPLICABLE.to_string());
            let created_on = game.created_on.clone().unwrap_or_else(|| NOT_APPLICABLE.to_string());
            let rules = game.rules.clone().unwrap_or_default();
            rsx! {
              tr {
                key: "{game.uid}",
                ondoubleclick: move |_| selected.set(Some(row_title.clone())),
                td { "{title}" },
                td { "{starting_balance}" },
                td { "{winner}" },
                td { "{created_on}" },
                td { "{rules}" },
              }
            }
          }
        }
      }
    }
    if let Some(game_title) = selected() {
      PortfoliosDialog {
        portfolios: portfolios_for_game(&games, &game_title),
        game_title,
        on_close: move |_| selected.set(None),
      }
    }
  }
}
