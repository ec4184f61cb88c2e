#![allow(non_snake_case)]
mod components;
mod pages;
mod utils;

use dioxus::prelude::*;
use pages::{games::Games, login::Login, signup::Signup};
use utils::session::Session;

#[derive(Routable, PartialEq, Clone)]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/games")]
    Games {},
    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    use_context_provider(Session::new);
    rsx! { Router::<Route> {} }
}

// The bare root shows the signup flow; its guard forwards authenticated
// sessions to the games list.
#[component]
fn Root() -> Element {
    rsx! { Signup {} }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "The page you requested doesn't exist." }
        pre { color: "red", "log:\nattempted to navigate to: {route:?}" }
    }
}
