use serde::Deserialize;

/// Body of `POST /account/login`. Credentials are accepted as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
