use web_sys::{wasm_bindgen::JsCast, window, HtmlDocument};

/// Reads the `csrftoken` cookie Django sets after authentication. Absent
/// cookie (or no DOM) yields `None` and the header is simply omitted.
pub fn csrf_token() -> Option<String> {
  let document = window()?.document()?;
  let html_document = document.dyn_into::<HtmlDocument>().ok()?;
  let cookies = html_document.cookie().ok()?;
  cookie_value(&cookies, "csrftoken")
}

pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
  cookies.split(';').map(str::trim).find_map(|pair| {
    let (key, value) = pair.split_once('=')?;
    (key == name).then(|| value.to_string())
  })
}

#[cfg(test)]
mod tests {
  use super::cookie_value;

  #[test]
  fn finds_token_among_other_cookies() {
    let cookies = "sessionid=abc123; csrftoken=tok-456; theme=dark";
    assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("tok-456"));
  }

  #[test]
  fn missing_or_prefixed_names_do_not_match() {
    assert_eq!(cookie_value("sessionid=abc123", "csrftoken"), None);
    assert_eq!(cookie_value("xcsrftoken=nope", "csrftoken"), None);
    assert_eq!(cookie_value("", "csrftoken"), None);
  }
}
