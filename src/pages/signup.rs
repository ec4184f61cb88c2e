use dioxus::{logger::tracing::error, prelude::*};

use crate::{
  components::toast::{show_toast, ErrorToast},
  utils::{
    api::{ApiClient, API_BASE_URL},
    session::Session,
  },
  Route,
};

// Password match is left to the backend; the registration form submits both
// entries as-is and surfaces nothing client side.
#[component]
pub fn Signup() -> Element {
  let mut session = use_context::<Session>();
  let nav = navigator();

  if (session.logged_in)() {
    nav.replace(Route::Games {});
    return rsx! {};
  }

  static CSS: Asset = asset!("/assets/main.css");

  rsx! {
    document::Link { rel: "stylesheet", href: CSS },
    div {
      class: "auth-page",
      h1 { "Signup User" },
      form {
        id: "signup-form",
        onsubmit: move |evt: FormEvent| {
          let values = evt.values();
          let username = values.get("username").map(|v| v.as_value()).unwrap_or_default();
          let password1 = values.get("password1").map(|v| v.as_value()).unwrap_or_default();
          let password2 = values.get("password2").map(|v| v.as_value()).unwrap_or_default();

          spawn(async move {
            let api = ApiClient::new(reqwest::Client::new(), API_BASE_URL);
            match api.register(&username, &password1, &password2).await {
              Ok(()) => {
                session.log_in(username);
                nav.replace(Route::Games {});
              }
              Err(err) => {
                error!("signup failed: {err}");
                show_toast("signup-error-toast");
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
          input { class: "form-input", name: "password1", r#type: "password", required: true }
        },
        div {
          class: "form-group",
          label { class: "form-label", "Confirm Password" },
          input { class: "form-input", name: "password2", r#type: "password", required: true }
        },
        div {
          class: "form-actions",
          button { r#type: "submit", class: "button button-primary", "Sign up" },
          button {
            r#type: "button",
            class: "button",
            onclick: move |_| { nav.push(Route::Login {}); },
            "Log In Existing User"
          }
        }
      },
      ErrorToast { id: "signup-error-toast", content: "An error occurred during registration." }
    }
  }
}
