use dioxus::{logger::tracing::error, prelude::*};

use crate::{
  components::{
    gameTable::GameTable,
    newGameDialog::NewGameDialog,
    toast::{show_toast, SuccessToast},
  },
  utils::{
    api::{ApiClient, API_BASE_URL},
    server::Game,
    session::Session,
  },
  Route,
};

#[component]
pub fn Games() -> Element {
  let mut session = use_context::<Session>();
  let nav = navigator();

  let mut games: Signal<Vec<Game>> = use_signal(Vec::new);
  let mut new_game_open = use_signal(|| false);

  // each run replaces the whole list; restarted after a successful create
  let mut games_resource = use_resource(move || async move {
    let api = ApiClient::new(reqwest::Client::new(), API_BASE_URL);
    match api.fetch_games().await {
      Ok(list) => games.set(list),
      Err(err) => error!("failed to fetch games: {err}"),
    }
  });

  if !(session.logged_in)() {
    nav.replace(Route::Login {});
    return rsx! {};
  }

  static CSS: Asset = asset!("/assets/main.css");

  rsx! {
    document::Link { rel: "stylesheet", href: CSS },
    div {
      class: "games-page",
      div {
        class: "games-header",
        h1 { "Trade Simulation" },
        div {
          class: "games-header-actions",
          button {
            class: "button button-primary",
            onclick: move |_| new_game_open.set(true),
            "Create New Game"
          },
          button {
            class: "button",
            onclick: move |_| {
              session.log_out();
              nav.replace(Route::Login {});
            },
            "Logout"
          }
        }
      },
      GameTable { games: games() },
      if new_game_open() {
        NewGameDialog {
          open: new_game_open,
          on_created: move |_| {
            games_resource.restart();
            show_toast("game-created-toast");
          },
        }
      }
      SuccessToast { id: "game-created-toast", content: "Game created." }
    }
  }
}
