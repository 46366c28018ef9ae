use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
  #[error("not authorized")]
  NotAuthorized,
  #[error("not found")]
  NotFound,
  #[error("request failed with status {0}")]
  Status(StatusCode),
  #[error(transparent)]
  Transport(#[from] reqwest::Error),
}

impl ApiError {
  pub(crate) fn from_status(status: StatusCode) -> Option<Self> {
    match status {
      status if status.is_success() => None,
      StatusCode::FORBIDDEN => Some(Self::NotAuthorized),
      StatusCode::NOT_FOUND => Some(Self::NotFound),
      status => Some(Self::Status(status)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_status_passes_success_through() {
    assert!(ApiError::from_status(StatusCode::OK).is_none());
    assert!(ApiError::from_status(StatusCode::CREATED).is_none());
  }

  #[test]
  fn from_status_distinguishes_authorization_failures() {
    assert!(matches!(
      ApiError::from_status(StatusCode::FORBIDDEN),
      Some(ApiError::NotAuthorized)
    ));

    assert!(matches!(
      ApiError::from_status(StatusCode::NOT_FOUND),
      Some(ApiError::NotFound)
    ));

    assert!(matches!(
      ApiError::from_status(StatusCode::BAD_REQUEST),
      Some(ApiError::Status(StatusCode::BAD_REQUEST))
    ));
  }
}
