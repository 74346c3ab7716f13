use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::events::SoundKind;

pub const SECTION: &str = "sounds";
pub const KEY_ENABLED: &str = "enabled";
pub const KEY_ROOMS: &str = "rooms";

pub trait SettingsStore {
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;
    fn set_bool(&mut self, section: &str, key: &str, value: bool);

    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn set_string(&mut self, section: &str, key: &str, value: &str);

    fn get_string_list(&self, section: &str, key: &str) -> Vec<String>;
    fn add_to_string_list(&mut self, section: &str, key: &str, value: &str) -> bool;
    fn remove_from_string_list(&mut self, section: &str, key: &str, value: &str) -> bool;
    fn clear_string_list(&mut self, section: &str, key: &str) -> bool;
}

pub fn enabled(store: &dyn SettingsStore) -> bool {
    store.get_bool(SECTION, KEY_ENABLED, false)
}

pub fn set_enabled(store: &mut dyn SettingsStore, value: bool) {
    store.set_bool(SECTION, KEY_ENABLED, value);
}

/// The configured sound for `kind`. An empty stored string counts as unset.
pub fn sound_file(store: &dyn SettingsStore, kind: SoundKind) -> Option<String> {
    store
        .get_string(SECTION, kind.key())
        .filter(|path| !path.is_empty())
}

pub fn set_sound_file(store: &mut dyn SettingsStore, kind: SoundKind, path: &str) {
    store.set_string(SECTION, kind.key(), path);
}

pub fn clear_sound_file(store: &mut dyn SettingsStore, kind: SoundKind) {
    store.set_string(SECTION, kind.key(), "");
}

pub fn room_allowlist(store: &dyn SettingsStore) -> Vec<String> {
    store.get_string_list(SECTION, KEY_ROOMS)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoundSettings {
    pub enabled: bool,
    pub chat_sound: Option<String>,
    pub room_sound: Option<String>,
    pub private_sound: Option<String>,
    pub room_allowlist: Vec<String>,
}

impl SoundSettings {
    pub fn read(store: &dyn SettingsStore) -> Self {
        Self {
            enabled: enabled(store),
            chat_sound: sound_file(store, SoundKind::Chat),
            room_sound: sound_file(store, SoundKind::Room),
            private_sound: sound_file(store, SoundKind::Private),
            room_allowlist: room_allowlist(store),
        }
    }

    pub fn sound_for(&self, kind: SoundKind) -> Option<&str> {
        match kind {
            SoundKind::Chat => self.chat_sound.as_deref(),
            SoundKind::Room => self.room_sound.as_deref(),
            SoundKind::Private => self.private_sound.as_deref(),
        }
    }

    pub fn any_sound_set(&self) -> bool {
        SoundKind::ALL.iter().any(|kind| self.sound_for(*kind).is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    String(String),
    List(Vec<String>),
}

type Sections = BTreeMap<String, BTreeMap<String, SettingValue>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemorySettings {
    sections: Sections,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, section: &str, key: &str) -> Option<&SettingValue> {
        self.sections.get(section)?.get(key)
    }

    fn put(&mut self, section: &str, key: &str, value: SettingValue) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    fn list_mut(&mut self, section: &str, key: &str) -> Option<&mut Vec<String>> {
        match self.sections.get_mut(section)?.get_mut(key)? {
            SettingValue::List(list) => Some(list),
            _ => None,
        }
    }
}

impl SettingsStore for MemorySettings {
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.get(section, key) {
            Some(SettingValue::Bool(value)) => *value,
            _ => default,
        }
    }

    fn set_bool(&mut self, section: &str, key: &str, value: bool) {
        self.put(section, key, SettingValue::Bool(value));
    }

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        match self.get(section, key) {
            Some(SettingValue::String(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn set_string(&mut self, section: &str, key: &str, value: &str) {
        self.put(section, key, SettingValue::String(value.to_string()));
    }

    fn get_string_list(&self, section: &str, key: &str) -> Vec<String> {
        match self.get(section, key) {
            Some(SettingValue::List(list)) => list.clone(),
            _ => Vec::new(),
        }
    }

    fn add_to_string_list(&mut self, section: &str, key: &str, value: &str) -> bool {
        if let Some(list) = self.list_mut(section, key) {
            if list.iter().any(|v| v == value) {
                return false;
            }
            list.push(value.to_string());
            return true;
        }

        self.put(section, key, SettingValue::List(vec![value.to_string()]));
        true
    }

    fn remove_from_string_list(&mut self, section: &str, key: &str, value: &str) -> bool {
        let Some(list) = self.list_mut(section, key) else {
            return false;
        };
        let before = list.len();
        list.retain(|v| v != value);
        list.len() != before
    }

    fn clear_string_list(&mut self, section: &str, key: &str) -> bool {
        match self.list_mut(section, key) {
            Some(list) => {
                list.clear();
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    inner: MemorySettings,
}

impl FileSettings {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let inner = if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read settings at {}", path.display()))?;
            if raw.trim().is_empty() {
                MemorySettings::new()
            } else {
                serde_json::from_str(&raw)
                    .with_context(|| format!("parse settings at {}", path.display()))?
            }
        } else {
            MemorySettings::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).context("create settings dir")?;

        let json = serde_json::to_string_pretty(&self.inner).context("serialize settings")?;
        let mut temp = tempfile::NamedTempFile::new_in(&dir).context("create settings temp")?;
        temp.write_all(json.as_bytes())
            .context("write settings temp")?;
        temp.persist(&self.path)
            .with_context(|| format!("write settings at {}", self.path.display()))?;
        Ok(())
    }
}

impl SettingsStore for FileSettings {
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.inner.get_bool(section, key, default)
    }

    fn set_bool(&mut self, section: &str, key: &str, value: bool) {
        self.inner.set_bool(section, key, value)
    }

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.inner.get_string(section, key)
    }

    fn set_string(&mut self, section: &str, key: &str, value: &str) {
        self.inner.set_string(section, key, value)
    }

    fn get_string_list(&self, section: &str, key: &str) -> Vec<String> {
        self.inner.get_string_list(section, key)
    }

    fn add_to_string_list(&mut self, section: &str, key: &str, value: &str) -> bool {
        self.inner.add_to_string_list(section, key, value)
    }

    fn remove_from_string_list(&mut self, section: &str, key: &str, value: &str) -> bool {
        self.inner.remove_from_string_list(section, key, value)
    }

    fn clear_string_list(&mut self, section: &str, key: &str) -> bool {
        self.inner.clear_string_list(section, key)
    }
}
