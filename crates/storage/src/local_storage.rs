use std::collections::VecDeque;

use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use liftlog_web_app::{Settings, SettingsRepository, log};
use serde::de::DeserializeOwned;

const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

fn read_or_default<T: DeserializeOwned>(
    key: &str,
    default: impl FnOnce() -> T,
) -> Result<T, StorageError> {
    match LocalStorage::get(key) {
        Ok(value) => Ok(value),
        Err(StorageError::KeyNotFound(_)) => Ok(default()),
        Err(err) => Err(err),
    }
}

pub struct UI;

impl SettingsRepository for UI {
    async fn read_settings(&self) -> Result<Settings, String> {
        read_or_default(KEY_SETTINGS, Settings::default).map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        read_or_default(KEY_LOG, VecDeque::new)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        LocalStorage::set(KEY_LOG, entries).map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
