//! Persisted user preferences (language and theme).
//!
//! Values are stored as plain strings under fixed keys. Anything missing or
//! unrecognised reads back as the default, and a backend that stops working
//! only costs persistence: the store keeps serving the session from memory.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use crate::config::{LANGUAGE_KEY, THEME_KEY};
use crate::error::{Result, ViewError};

/// A closed set of options persisted under a single storage key.
pub trait Preference:
    Copy + Default + PartialEq + fmt::Debug + FromStr<Err = ViewError> + 'static
{
    const KEY: &'static str;

    fn as_str(self) -> &'static str;

    /// The other option. Both preferences are two-valued.
    fn toggled(self) -> Self;

    fn into_change(self) -> PreferenceChange;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
}

impl Language {
    /// Label for the switch button, which names the language you'd switch *to*.
    pub fn switch_label(self) -> &'static str {
        match self {
            Language::En => "KO",
            Language::Ko => "EN",
        }
    }
}

impl FromStr for Language {
    type Err = ViewError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "en" => Ok(Language::En),
            "ko" => Ok(Language::Ko),
            other => Err(ViewError::InvalidPersistedValue {
                key: LANGUAGE_KEY,
                value: other.to_string(),
            }),
        }
    }
}

impl Preference for Language {
    const KEY: &'static str = LANGUAGE_KEY;

    fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ko,
            Language::Ko => Language::En,
        }
    }

    fn into_change(self) -> PreferenceChange {
        PreferenceChange::Language(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl FromStr for Theme {
    type Err = ViewError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ViewError::InvalidPersistedValue {
                key: THEME_KEY,
                value: other.to_string(),
            }),
        }
    }
}

impl Preference for Theme {
    const KEY: &'static str = THEME_KEY;

    fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn into_change(self) -> PreferenceChange {
        PreferenceChange::Theme(self)
    }
}

/// Sent to subscribers after every successful `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    Language(Language),
    Theme(Theme),
}

/// Key-value storage the preferences are persisted in.
pub trait PreferenceBackend {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Backend that lives only as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(PreferenceChange)>;

pub struct PreferenceStore<B> {
    backend: B,
    /// Values written this session; consulted when the backend can't answer.
    session: HashMap<&'static str, &'static str>,
    degraded: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: HashMap::new(),
            degraded: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn get<P: Preference>(&self) -> P {
        // Once writes fail the backend holds stale values for anything set since.
        if self.degraded {
            if let Some(value) = self.session_value::<P>() {
                return value;
            }
        }

        match self.backend.read(P::KEY) {
            Ok(Some(raw)) => raw.parse::<P>().unwrap_or_else(|err| {
                warn!("{}, using {:?}", err, P::default());
                P::default()
            }),
            Ok(None) => self.session_value().unwrap_or_default(),
            Err(err) => {
                warn!("Reading {} failed: {}", P::KEY, err);
                self.session_value().unwrap_or_default()
            }
        }
    }

    pub fn set<P: Preference>(&mut self, value: P) {
        self.session.insert(P::KEY, value.as_str());
        if let Err(err) = self.backend.write(P::KEY, value.as_str()) {
            if !self.degraded {
                warn!("{}; preferences will only last for this session", err);
            }
            self.degraded = true;
        }
        debug!("Preference {} set to {}", P::KEY, value.as_str());

        let change = value.into_change();
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(change);
        }
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(PreferenceChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// True once a write has failed and persistence was abandoned.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn session_value<P: Preference>(&self) -> Option<P> {
        self.session.get(P::KEY).and_then(|raw| raw.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Backend whose every call fails, like localStorage in a locked-down browser.
    struct Unavailable;

    impl PreferenceBackend for Unavailable {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(ViewError::StorageUnavailable("blocked".into()))
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(ViewError::StorageUnavailable("blocked".into()))
        }
    }

    /// Reads succeed but writes throw, as with a full quota or Safari private mode.
    struct ReadOnly(MemoryStorage);

    impl PreferenceBackend for ReadOnly {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.0.read(key)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(ViewError::StorageUnavailable("QuotaExceededError".into()))
        }
    }

    #[test]
    fn test_defaults_when_empty() {
        let store = PreferenceStore::new(MemoryStorage::default());
        assert_eq!(store.get::<Language>(), Language::En);
        assert_eq!(store.get::<Theme>(), Theme::Dark);
    }

    #[test]
    fn test_invalid_language_falls_back() {
        for raw in ["fr", "", "EN", "ko ", "null"] {
            let backend = MemoryStorage::default().with_entry("lang", raw);
            let store = PreferenceStore::new(backend);
            assert_eq!(store.get::<Language>(), Language::En, "stored {:?}", raw);
        }
    }

    #[test]
    fn test_invalid_theme_falls_back() {
        let backend = MemoryStorage::default().with_entry("theme", "sepia");
        let store = PreferenceStore::new(backend);
        assert_eq!(store.get::<Theme>(), Theme::Dark);
    }

    #[test]
    fn test_set_persists_under_key() {
        let mut store = PreferenceStore::new(MemoryStorage::default());
        store.set(Language::Ko);
        store.set(Theme::Light);

        let backend = store.into_backend();
        assert_eq!(backend.entry("lang"), Some("ko"));
        assert_eq!(backend.entry("theme"), Some("light"));
    }

    #[test]
    fn test_unavailable_storage_keeps_session_values() {
        let mut store = PreferenceStore::new(Unavailable);
        assert_eq!(store.get::<Theme>(), Theme::Dark);
        assert!(!store.is_degraded());

        store.set(Theme::Light);
        assert!(store.is_degraded());
        assert_eq!(store.get::<Theme>(), Theme::Light);
        assert_eq!(store.get::<Language>(), Language::En);
    }

    #[test]
    fn test_failed_write_wins_over_stale_stored_value() {
        let backend = ReadOnly(MemoryStorage::default().with_entry("theme", "dark").with_entry("lang", "ko"));
        let mut store = PreferenceStore::new(backend);
        assert_eq!(store.get::<Theme>(), Theme::Dark);

        store.set(Theme::Light);
        assert!(store.is_degraded());
        assert_eq!(store.get::<Theme>(), Theme::Light);
        // Untouched keys still come from storage
        assert_eq!(store.get::<Language>(), Language::Ko);
    }

    #[test]
    fn test_subscribers_notified_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = PreferenceStore::new(MemoryStorage::default());

        let sink = seen.clone();
        let id = store.subscribe(move |change| sink.borrow_mut().push(change));

        store.set(Language::Ko);
        store.set(Theme::Light);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(Language::En);

        assert_eq!(
            *seen.borrow(),
            vec![
                PreferenceChange::Language(Language::Ko),
                PreferenceChange::Theme(Theme::Light),
            ]
        );
    }

    #[test]
    fn test_toggled_is_involution() {
        assert_eq!(Language::En.toggled().toggled(), Language::En);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_ne!(Theme::Dark.toggled(), Theme::Dark);
    }

    #[test]
    fn test_switch_label_names_other_language() {
        assert_eq!(Language::En.switch_label(), "KO");
        assert_eq!(Language::Ko.switch_label(), "EN");
    }
}
