#![allow(non_snake_case)]

use dioxus::document;
use dioxus::prelude::*;

#[component]
pub fn ErrorToast(id: String, content: String) -> Element {
  rsx! {
    div { id: "{id}", class: "toast toast-error", "{content}" }
  }
}

#[component]
pub fn SuccessToast(id: String, content: String) -> Element {
  rsx! {
    div { id: "{id}", class: "toast toast-success", "{content}" }
  }
}

pub fn show_toast(id: &str) {
  document::eval(&format!(
    r#"
    var x = document.getElementById("{id}");
    x.classList.add("show");
    setTimeout(function(){{x.classList.remove("show");}}, 2000);
    "#
  ));
}
