use super::*;

pub(crate) fn cookie_value<'a>(
  cookies: &'a str,
  name: &str,
) -> Option<&'a str> {
  cookies
    .split(';')
    .filter_map(|pair| pair.trim().split_once('='))
    .find_map(|(key, value)| (key == name).then_some(value))
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct Session {
  #[serde(default)]
  cookies: String,
  #[serde(default, deserialize_with = "deserialize_optional_id")]
  user_id: Option<String>,
}

impl Session {
  pub(crate) fn cookie_header(&self) -> Option<&str> {
    if self.cookies.is_empty() {
      None
    } else {
      Some(&self.cookies)
    }
  }

  pub(crate) fn csrf_token(&self) -> Option<&str> {
    cookie_value(&self.cookies, "csrftoken")
  }

  pub(crate) fn is_author(&self, author_id: &str) -> bool {
    self.user_id().is_some_and(|user_id| user_id == author_id)
  }

  pub(crate) fn load() -> Result<Self> {
    let path = Self::session_path()?;

    if !path.exists() {
      return Ok(Self::default());
    }

    let data = fs::read(&path)
      .with_context(|| format!("could not read {}", path.display()))?;

    if data.is_empty() {
      return Ok(Self::default());
    }

    serde_json::from_slice(&data)
      .with_context(|| format!("could not parse {}", path.display()))
  }

  fn session_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("AGORA_SESSION_FILE") {
      return Ok(PathBuf::from(path));
    }

    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("agora").join("session.json"))
  }

  pub(crate) fn user_id(&self) -> Option<&str> {
    self
      .user_id
      .as_deref()
      .filter(|id| !id.is_empty() && *id != "null")
  }

  #[must_use]
  pub(crate) fn with_profile(mut self, profile: &Profile) -> Self {
    if let Some(id) = profile.id.as_deref() {
      self.user_id = Some(id.to_string());
    }

    self
  }
}
