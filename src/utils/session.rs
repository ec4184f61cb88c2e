use dioxus::prelude::*;

/// Process-wide session state, provided as context at app start and torn
/// down with the app. Logout is local only; no server-side invalidation.
#[derive(Clone, Copy)]
pub struct Session {
  pub logged_in: Signal<bool>,
  pub username: Signal<String>,
}

impl Session {
  pub fn new() -> Self {
    Self { logged_in: Signal::new(false), username: Signal::new(String::new()) }
  }

  pub fn log_in(&mut self, username: String) {
    self.username.set(username);
    self.logged_in.set(true);
  }

  pub fn log_out(&mut self) {
    self.logged_in.set(false);
    self.username.set(String::new());
  }
}
