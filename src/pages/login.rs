use dioxus::{logger::tracing::error, prelude::*};

use crate::{
  components::toast::{show_toast, ErrorToast},
  utils::{
    api::{ApiClient, API_BASE_URL},
    session::Session,
  },
  Route,
};

#[component]
pub fn Login() -> Element {
  let mut session = use_context::<Session>();
  let nav = navigator();

  // already authenticated sessions land on the games list
  if (session.logged_in)() {
    nav.replace(Route::Games {});
    return rsx! {};
  }

  static CSS: Asset = asset!("/assets/main.css");

  rsx! {
    document::Link { rel: "stylesheet", href: CSS },
    div {
      class: "auth-page",
      h1 { "Login User" },
      form {
        id: "login-form",
        onsubmit: move |evt: FormEvent| {
          let values = evt.values();
          let username = values.get("username").map(|v| v.as_value()).unwrap_or_default();
          let password = values.get("password").map(|v| v.as_value()).unwrap_or_default();

          spawn(async move {
            let api = ApiClient::new(reqwest::Client::new(), API_BASE_URL);
            match api.login(&username, &password).await {
              Ok(()) => {
                session.log_in(username);
                nav.replace(Route::Games {});
              }
              Err(err) => {
                error!("login failed: {err}");
                show_toast("login-error-toast");
              }
            }
          });
        },
        div {
          class: "form-group",
          label { class: "form-label", "Username" },
          input { class: "form-input", name: "username", r#type: "text", required: true }
        },
        div {
          class: "form-group",
          label { class: "form-label", "Password" },
          input { class: "form-input", name: "password", r#type: "password", required: true }
        },
        div {
          class: "form-actions",
          button { r#type: "submit", class: "button button-primary", "Login" }
        }
      },
      ErrorToast { id: "login-error-toast", content: "Username or password is incorrect." }
    }
  }
}
