use std::fmt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const NOT_APPLICABLE: &str = "N/A";

/* Server Records */

// Games arrive with their portfolio snapshots embedded, so opening the
// portfolio leaderboard needs no extra fetch.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Game {
  pub uid: String,
  pub title: String,
  pub starting_balance: Decimal,
  #[serde(default)]
  pub rules: Option<String>,
  #[serde(default)]
  pub winner: Option<String>,
  #[serde(default)]
  pub created_on: Option<String>,
  #[serde(default)]
  pub portfolios: Vec<Portfolio>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Owner {
  pub username: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Portfolio {
  pub uid: String,
  pub title: String,
  #[serde(default)]
  pub owner: Option<Owner>,
  pub game_rank: i64,
  pub total_value: Decimal,
  pub cash_balance: Decimal,
  #[serde(default)]
  pub holdings: Vec<Holding>,
  #[serde(default)]
  pub options: Vec<OptionPosition>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Holding {
  pub uid: String,
  pub ticker: String,
  pub shares: Decimal,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OptionPosition {
  pub uid: String,
  pub contract: String,
  pub quantity: Decimal,
}

/* Server Requests */

#[derive(Debug, Serialize)]
pub struct LoginRequest {
  pub username: String,
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
  pub username: String,
  pub password1: String,
  pub password2: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
  pub starting_balance: String,
  pub rules: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePortfolioRequest {
  pub username: String,
}

// One shared trade endpoint; the tag picks the stock or option handler
// server side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "securityType", rename_all = "lowercase")]
pub enum TradeRequest {
  #[serde(rename_all = "camelCase")]
  Stock {
    portfolio_title: String,
    game_title: String,
    ticker: String,
    shares: i64,
    exercise: bool,
  },
  #[serde(rename_all = "camelCase")]
  Option {
    portfolio_title: String,
    game_title: String,
    contract: String,
    quantity: i64,
  },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SecurityType {
  Stock,
  Option,
}

impl fmt::Display for SecurityType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Stock => write!(f, "Stock"),
      Self::Option => write!(f, "Option"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeDirection {
  Buy,
  Sell,
}

impl fmt::Display for TradeDirection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Buy => write!(f, "Buy"),
      Self::Sell => write!(f, "Sell"),
    }
  }
}

/// Sell transmits the negated magnitude, Buy the magnitude, no matter
/// what sign the user typed into the form.
pub fn signed_quantity(direction: TradeDirection, quantity: i64) -> i64 {
  match direction {
    TradeDirection::Buy => quantity.abs(),
    TradeDirection::Sell => -quantity.abs(),
  }
}

pub fn parse_quantity(input: &str) -> Result<i64, AppError> {
  input
    .trim()
    .parse::<i64>()
    .map_err(|_| AppError::InvalidInput(format!("not a whole number: {:?}", input)))
}

// Game and portfolio titles end up as API path segments, so an empty one
// would mangle the request path.
pub fn validate_title(field: &str, title: &str) -> Result<(), AppError> {
  if title.trim().is_empty() {
    return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
  }
  Ok(())
}

/// Assembles a trade payload from raw form input, applying the sign
/// convention and rejecting empty symbols or unparseable quantities.
pub fn build_trade(
  security: SecurityType,
  direction: TradeDirection,
  game_title: &str,
  portfolio_title: &str,
  symbol: &str,
  quantity_input: &str,
  exercise: bool,
) -> Result<TradeRequest, AppError> {
  let signed = signed_quantity(direction, parse_quantity(quantity_input)?);

  let trade = match security {
    SecurityType::Stock => {
      validate_title("ticker", symbol)?;
      TradeRequest::Stock {
        portfolio_title: portfolio_title.to_string(),
        game_title: game_title.to_string(),
        ticker: symbol.trim().to_string(),
        shares: signed,
        exercise,
      }
    }
    SecurityType::Option => {
      validate_title("contract", symbol)?;
      TradeRequest::Option {
        portfolio_title: portfolio_title.to_string(),
        game_title: game_title.to_string(),
        contract: symbol.trim().to_string(),
        quantity: signed,
      }
    }
  };
  Ok(trade)
}

/* View rows */

#[derive(Debug, Clone, PartialEq)]
pub struct HoldingRow {
  pub id: String,
  pub security: SecurityType,
  pub ticker: String,
  pub shares: String,
  pub contract: String,
  pub quantity: String,
}

/// Flattens stock holdings and option positions into one table, filling
/// the columns that don't apply to a row with a placeholder.
pub fn holding_rows(holdings: &[Holding], options: &[OptionPosition]) -> Vec<HoldingRow> {
  let mut rows = Vec::with_capacity(holdings.len() + options.len());
  for h in holdings {
    rows.push(HoldingRow {
      id: h.uid.clone(),
      security: SecurityType::Stock,
      ticker: h.ticker.clone(),
      shares: h.shares.to_string(),
      contract: NOT_APPLICABLE.to_string(),
      quantity: NOT_APPLICABLE.to_string(),
    });
  }
  for o in options {
    rows.push(HoldingRow {
      id: o.uid.clone(),
      security: SecurityType::Option,
      ticker: NOT_APPLICABLE.to_string(),
      shares: NOT_APPLICABLE.to_string(),
      contract: o.contract.clone(),
      quantity: o.quantity.to_string(),
    });
  }
  rows
}

/// The games listing embeds portfolio snapshots, so the per-game leaderboard
/// is a filter over it rather than another fetch.
pub fn portfolios_for_game(games: &[Game], game_title: &str) -> Vec<Portfolio> {
  games
    .iter()
    .find(|g| g.title == game_title)
    .map(|g| g.portfolios.clone())
    .unwrap_or_default()
}

/* App Errors */

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  Request(String),
  Server { status: u16, body: String },
  Decode(String),
  InvalidInput(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::Request(msg) => write!(f, "Request error: {}", msg),
      AppError::Server { status, body } => write!(f, "Server returned {}: {}", status, body),
      AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
      AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn sell_negates_magnitude() {
    assert_eq!(signed_quantity(TradeDirection::Sell, 10), -10);
    // user typed a negative number themselves
    assert_eq!(signed_quantity(TradeDirection::Sell, -10), -10);
    assert_eq!(signed_quantity(TradeDirection::Sell, 0), 0);
  }

  #[test]
  fn buy_keeps_magnitude() {
    assert_eq!(signed_quantity(TradeDirection::Buy, 10), 10);
    assert_eq!(signed_quantity(TradeDirection::Buy, -10), 10);
  }

  #[test]
  fn sell_stock_payload_carries_negative_shares() {
    let trade = build_trade(
      SecurityType::Stock,
      TradeDirection::Sell,
      "Cup Stacking",
      "team rocket",
      "AAPL",
      "10",
      false,
    )
    .unwrap();

    let payload = serde_json::to_value(&trade).unwrap();
    assert_eq!(payload["securityType"], "stock");
    assert_eq!(payload["ticker"], "AAPL");
    assert_eq!(payload["shares"], -10);
    assert_eq!(payload["exercise"], false);
    assert_eq!(payload["portfolioTitle"], "team rocket");
    assert_eq!(payload["gameTitle"], "Cup Stacking");
    // stock payloads carry no option fields
    assert!(payload.get("contract").is_none());
    assert!(payload.get("quantity").is_none());
  }

  #[test]
  fn buy_option_payload_carries_positive_quantity() {
    let trade = build_trade(
      SecurityType::Option,
      TradeDirection::Buy,
      "Cup Stacking",
      "team rocket",
      "AAPL211231C00150000",
      "3",
      false,
    )
    .unwrap();

    let payload = serde_json::to_value(&trade).unwrap();
    assert_eq!(payload["securityType"], "option");
    assert_eq!(payload["contract"], "AAPL211231C00150000");
    assert_eq!(payload["quantity"], 3);
    assert!(payload.get("ticker").is_none());
    assert!(payload.get("shares").is_none());
    assert!(payload.get("exercise").is_none());
  }

  #[test]
  fn trade_rejects_empty_symbol_and_bad_quantity() {
    let empty = build_trade(
      SecurityType::Stock,
      TradeDirection::Buy,
      "g",
      "p",
      "  ",
      "10",
      false,
    );
    assert!(matches!(empty, Err(AppError::InvalidInput(_))));

    let bad_qty = build_trade(
      SecurityType::Option,
      TradeDirection::Buy,
      "g",
      "p",
      "SPY",
      "ten",
      false,
    );
    assert!(matches!(bad_qty, Err(AppError::InvalidInput(_))));
  }

  #[test]
  fn quantity_parsing_trims_whitespace() {
    assert_eq!(parse_quantity(" 42 ").unwrap(), 42);
    assert_eq!(parse_quantity("-7").unwrap(), -7);
    assert!(parse_quantity("").is_err());
    assert!(parse_quantity("1.5").is_err());
  }

  #[test]
  fn titles_used_as_path_segments_must_be_nonempty() {
    assert!(validate_title("game title", "Cup Stacking").is_ok());
    assert!(validate_title("portfolio title", "").is_err());
    assert!(validate_title("portfolio title", "   ").is_err());
  }

  #[test]
  fn game_listing_decodes() {
    let body = r#"[{"uid":"g1", "title":"Cup Stacking", "starting_balance":1000, "rules":"none"}]"#;
    let games: Vec<Game> = serde_json::from_str(body).unwrap();

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].uid, "g1");
    assert_eq!(games[0].title, "Cup Stacking");
    assert_eq!(games[0].starting_balance, dec!(1000));
    assert_eq!(games[0].rules.as_deref(), Some("none"));
    assert!(games[0].winner.is_none());
    assert!(games[0].portfolios.is_empty());
  }

  #[test]
  fn balances_decode_from_decimal_strings() {
    // DRF serializes DecimalField as a JSON string
    let body = r#"{
      "uid": "p1", "title": "alpha", "owner": {"username": "alice"},
      "game_rank": 2, "total_value": "10250.50", "cash_balance": "9000.00",
      "holdings": [{"uid": "h1", "ticker": "AAPL", "shares": "10.0"}],
      "options": []
    }"#;
    let p: Portfolio = serde_json::from_str(body).unwrap();
    assert_eq!(p.total_value, dec!(10250.50));
    assert_eq!(p.owner.unwrap().username, "alice");
    assert_eq!(p.holdings[0].shares, dec!(10.0));
  }

  fn sample_portfolio(uid: &str, title: &str) -> Portfolio {
    Portfolio {
      uid: uid.to_string(),
      title: title.to_string(),
      owner: None,
      game_rank: 1,
      total_value: dec!(10000),
      cash_balance: dec!(10000),
      holdings: vec![],
      options: vec![],
    }
  }

  #[test]
  fn holdings_and_options_flatten_into_one_table() {
    let holdings = vec![
      Holding { uid: "h1".into(), ticker: "AAPL".into(), shares: dec!(10) },
      Holding { uid: "h2".into(), ticker: "TSLA".into(), shares: dec!(-4) },
    ];
    let options = vec![OptionPosition {
      uid: "o1".into(),
      contract: "AAPL211231C00150000".into(),
      quantity: dec!(2),
    }];

    let rows = holding_rows(&holdings, &options);
    assert_eq!(rows.len(), holdings.len() + options.len());

    assert_eq!(rows[0].security, SecurityType::Stock);
    assert_eq!(rows[0].ticker, "AAPL");
    assert_eq!(rows[0].contract, NOT_APPLICABLE);
    assert_eq!(rows[0].quantity, NOT_APPLICABLE);
    assert_eq!(rows[1].shares, "-4");

    assert_eq!(rows[2].security, SecurityType::Option);
    assert_eq!(rows[2].id, "o1");
    assert_eq!(rows[2].ticker, NOT_APPLICABLE);
    assert_eq!(rows[2].shares, NOT_APPLICABLE);
    assert_eq!(rows[2].quantity, "2");
  }

  #[test]
  fn portfolio_filter_matches_on_game_title() {
    let games = vec![
      Game {
        uid: "g1".into(),
        title: "Cup Stacking".into(),
        starting_balance: dec!(1000),
        rules: None,
        winner: None,
        created_on: None,
        portfolios: vec![sample_portfolio("p1", "alpha"), sample_portfolio("p2", "beta")],
      },
      Game {
        uid: "g2".into(),
        title: "Other".into(),
        starting_balance: dec!(1000),
        rules: None,
        winner: None,
        created_on: None,
        portfolios: vec![sample_portfolio("p3", "gamma")],
      },
    ];

    let matched = portfolios_for_game(&games, "Cup Stacking");
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|p| p.uid != "p3"));
    assert!(portfolios_for_game(&games, "missing").is_empty());
  }

  #[test]
  fn create_requests_serialize_expected_bodies() {
    let game = CreateGameRequest { starting_balance: "1000".into(), rules: "none".into() };
    let v = serde_json::to_value(&game).unwrap();
    assert_eq!(v["startingBalance"], "1000");
    assert_eq!(v["rules"], "none");

    let portfolio = CreatePortfolioRequest { username: "alice".into() };
    let v = serde_json::to_value(&portfolio).unwrap();
    assert_eq!(v["username"], "alice");

    let register = RegisterRequest {
      username: "alice".into(),
      password1: "hunter2".into(),
      password2: "hunter2".into(),
    };
    let v = serde_json::to_value(&register).unwrap();
    assert_eq!(v["password1"], "hunter2");
  }
}
