use serde::{Deserialize, Serialize};

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

/// Connection and display preferences stored in the browser.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the server, without the API path.
    pub server_url: String,
    pub api_token: Option<String>,
    /// Short name of the preferred exercise language, e.g. `de`.
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            api_token: None,
            language: "en".to_string(),
        }
    }
}

impl Settings {
    /// Finds the preferred language among the languages offered by the server.
    #[must_use]
    pub fn preferred_language<'a>(
        &self,
        languages: &'a [liftlog_domain::Language],
    ) -> Option<&'a liftlog_domain::Language> {
        languages
            .iter()
            .find(|l| l.short_name.eq_ignore_ascii_case(&self.language))
    }
}
