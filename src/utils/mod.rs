pub mod api;
pub mod csrf;
pub mod server;
pub mod session;
