use dotenvy::dotenv;

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  dotenv().ok();

  // Base URL of the trade simulation REST backend, baked in at compile time.
  let base_url =
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
  println!("cargo::rustc-env=API_BASE_URL={}", base_url);
}
