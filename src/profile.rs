use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Profile {
  #[serde(default, deserialize_with = "deserialize_optional_id")]
  pub(crate) id: Option<String>,
  pub(crate) name: Option<String>,
}
