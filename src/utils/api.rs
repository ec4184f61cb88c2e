use super::csrf::csrf_token;
use super::server::{
  AppError, CreateGameRequest, CreatePortfolioRequest, Game, LoginRequest, Portfolio,
  RegisterRequest, TradeRequest, validate_title,
};

pub const API_BASE_URL: &str = env!("API_BASE_URL");

/// Thin client over the trade simulation REST backend. Every view builds its
/// own instance and refetches on demand; nothing is cached across calls.
pub struct ApiClient {
  client: reqwest::Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(client: reqwest::Client, base_url: &str) -> Self {
    Self { client, base_url: base_url.trim_end_matches('/').to_string() }
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  // Django checks the CSRF header on mutating requests when the cookie is set.
  fn post(&self, path: &str) -> reqwest::RequestBuilder {
    let mut req = self.client.post(self.url(path));
    if let Some(token) = csrf_token() {
      req = req.header("X-CSRFToken", token);
    }
    req
  }

  pub async fn login(&self, username: &str, password: &str) -> Result<(), AppError> {
    let body = LoginRequest { username: username.to_string(), password: password.to_string() };
    let resp = self
      .post("/auth/")
      .json(&body)
      .send()
      .await
      .map_err(|e| AppError::Request(e.to_string()))?;
    expect_success(resp).await?;
    Ok(())
  }

  pub async fn register(
    &self,
    username: &str,
    password1: &str,
    password2: &str,
  ) -> Result<(), AppError> {
    let body = RegisterRequest {
      username: username.to_string(),
      password1: password1.to_string(),
      password2: password2.to_string(),
    };
    let resp = self
      .post("/users/register/")
      .json(&body)
      .send()
      .await
      .map_err(|e| AppError::Request(e.to_string()))?;
    expect_success(resp).await?;
    Ok(())
  }

  pub async fn fetch_games(&self) -> Result<Vec<Game>, AppError> {
    let resp = self
      .client
      .get(self.url("/api/games/"))
      .send()
      .await
      .map_err(|e| AppError::Request(e.to_string()))?;
    let resp = expect_success(resp).await?;
    resp.json::<Vec<Game>>().await.map_err(|e| AppError::Decode(e.to_string()))
  }

  pub async fn create_game(
    &self,
    title: &str,
    starting_balance: &str,
    rules: &str,
  ) -> Result<(), AppError> {
    validate_title("game title", title)?;
    let body = CreateGameRequest {
      starting_balance: starting_balance.to_string(),
      rules: rules.to_string(),
    };
    let resp = self
      .post(&format!("/api/game/{}", title.trim()))
      .json(&body)
      .send()
      .await
      .map_err(|e| AppError::Request(e.to_string()))?;
    expect_success(resp).await?;
    Ok(())
  }

  pub async fn fetch_portfolio(
    &self,
    game_title: &str,
    portfolio_title: &str,
  ) -> Result<Portfolio, AppError> {
    let resp = self
      .client
      .get(self.url(&format!("/api/portfolio/{}/{}/", game_title, portfolio_title)))
      .send()
      .await
      .map_err(|e| AppError::Request(e.to_string()))?;
    let resp = expect_success(resp).await?;
    resp.json::<Portfolio>().await.map_err(|e| AppError::Decode(e.to_string()))
  }

  pub async fn create_portfolio(
    &self,
    game_title: &str,
    title: &str,
    username: &str,
  ) -> Result<(), AppError> {
    validate_title("game title", game_title)?;
    validate_title("portfolio title", title)?;
    let body = CreatePortfolioRequest { username: username.to_string() };
    let resp = self
      .post(&format!("/api/portfolio/{}/{}/", game_title.trim(), title.trim()))
      .json(&body)
      .send()
      .await
      .map_err(|e| AppError::Request(e.to_string()))?;
    expect_success(resp).await?;
    Ok(())
  }

  pub async fn submit_trade(&self, trade: &TradeRequest) -> Result<(), AppError> {
    let resp = self
      .post("/api/portfolio/trade")
      .json(trade)
      .send()
      .await
      .map_err(|e| AppError::Request(e.to_string()))?;
    expect_success(resp).await?;
    Ok(())
  }
}

async fn expect_success(resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
  let status = resp.status();
  if status.is_success() {
    Ok(resp)
  } else {
    let body = resp.text().await.unwrap_or_default();
    Err(AppError::Server { status: status.as_u16(), body })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // unroutable base so an accidental request fails loudly instead of hitting
  // a live server
  fn client() -> ApiClient {
    ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:1/")
  }

  #[test]
  fn base_url_trailing_slash_is_normalized() {
    let api = client();
    assert_eq!(api.url("/api/games/"), "http://127.0.0.1:1/api/games/");
  }

  #[tokio::test]
  async fn empty_portfolio_title_is_rejected_before_any_request() {
    let err = client().create_portfolio("Cup Stacking", "", "alice").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
  }

  #[tokio::test]
  async fn empty_game_title_is_rejected_before_any_request() {
    let err = client().create_game("   ", "1000", "none").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
  }
}
