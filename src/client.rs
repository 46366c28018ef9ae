use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
  cookies: Option<String>,
  csrf_token: Option<String>,
}

impl Client {
  pub(crate) async fn create_comment(
    &self,
    container_id: &str,
    content: &str,
    parent: Option<&str>,
  ) -> Result<Comment> {
    let mut body = serde_json::json!({ "content": content });

    if let Some(parent) = parent {
      body["parent"] = Value::String(parent.to_string());
    }

    let response = self
      .mutate(Method::POST, &format!("/comments/add/{container_id}"))
      .json(&body)
      .send()
      .await
      .map_err(ApiError::Transport)?;

    Ok(
      Self::ensure_success(response)?
        .json()
        .await
        .map_err(ApiError::Transport)?,
    )
  }

  pub(crate) async fn delete_comment(&self, comment_id: &str) -> Result {
    let response = self
      .mutate(Method::DELETE, &format!("/comments/delete/{comment_id}"))
      .send()
      .await
      .map_err(ApiError::Transport)?;

    Self::ensure_success(response)?;

    Ok(())
  }

  fn ensure_success(
    response: reqwest::Response,
  ) -> Result<reqwest::Response, ApiError> {
    match ApiError::from_status(response.status()) {
      None => Ok(response),
      Some(error) => Err(error),
    }
  }

  pub(crate) async fn fetch_posts(&self) -> Result<Vec<Post>> {
    let response = self
      .request(Method::GET, "/posts")
      .send()
      .await
      .map_err(ApiError::Transport)?;

    Ok(
      Self::ensure_success(response)?
        .json()
        .await
        .map_err(ApiError::Transport)?,
    )
  }

  pub(crate) async fn fetch_profile(&self) -> Result<Profile> {
    let response = self
      .request(Method::GET, "/users/me")
      .send()
      .await
      .map_err(ApiError::Transport)?;

    Ok(
      Self::ensure_success(response)?
        .json()
        .await
        .map_err(ApiError::Transport)?,
    )
  }

  pub(crate) async fn fetch_thread(
    &self,
    container_id: &str,
  ) -> Result<Vec<Comment>> {
    let response = self
      .request(Method::GET, &format!("/comments/{container_id}"))
      .send()
      .await
      .map_err(ApiError::Transport)?;

    Ok(
      Self::ensure_success(response)?
        .json()
        .await
        .map_err(ApiError::Transport)?,
    )
  }

  fn mutate(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
    let mut builder = self.request(method, path);

    if let Some(token) = &self.csrf_token {
      builder = builder.header("X-CSRFToken", token.as_str());
    }

    builder
  }

  pub(crate) fn new(config: &Config, session: &Session) -> Self {
    Self {
      base_url: config.base_url.clone(),
      client: reqwest::Client::new(),
      cookies: session.cookie_header().map(str::to_string),
      csrf_token: session.csrf_token().map(str::to_string),
    }
  }

  fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
    let mut builder = self
      .client
      .request(method, format!("{}{path}", self.base_url));

    if let Some(cookies) = &self.cookies {
      builder = builder.header(header::COOKIE, cookies.as_str());
    }

    builder
  }

  pub(crate) async fn toggle_like(
    &self,
    comment_id: &str,
  ) -> Result<LikeResponse> {
    let response = self
      .mutate(Method::POST, &format!("/comment/like/{comment_id}"))
      .send()
      .await
      .map_err(ApiError::Transport)?;

    Ok(
      Self::ensure_success(response)?
        .json()
        .await
        .map_err(ApiError::Transport)?,
    )
  }

  pub(crate) async fn update_comment(
    &self,
    comment_id: &str,
    content: &str,
  ) -> Result<Comment> {
    let body = serde_json::json!({ "content": content });

    let response = self
      .mutate(Method::PATCH, &format!("/comments/update/{comment_id}"))
      .json(&body)
      .send()
      .await
      .map_err(ApiError::Transport)?;

    Ok(
      Self::ensure_success(response)?
        .json()
        .await
        .map_err(ApiError::Transport)?,
    )
  }
}
