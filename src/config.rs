use super::*;

pub(crate) struct Config {
  pub(crate) base_url: String,
}

impl Config {
  pub(crate) fn load() -> Self {
    let base_url =
      env::var("AGORA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn load_trims_trailing_slashes_from_the_override() {
    // SAFETY: Scoped test code sets env var to isolate the base URL.
    unsafe {
      env::set_var("AGORA_API_URL", "https://example.com/app/");
    }

    let config = Config::load();

    // SAFETY: Test restores original environment variable state before exit.
    unsafe {
      env::remove_var("AGORA_API_URL");
    }

    assert_eq!(config.base_url, "https://example.com/app");
  }
}
