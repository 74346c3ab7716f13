use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SoundKind {
    Chat,
    Room,
    Private,
}

impl SoundKind {
    pub const ALL: [SoundKind; 3] = [SoundKind::Chat, SoundKind::Room, SoundKind::Private];

    pub fn key(self) -> &'static str {
        match self {
            SoundKind::Chat => "chat",
            SoundKind::Room => "room",
            SoundKind::Private => "private",
        }
    }

    pub fn parse(arg: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == arg)
    }
}

impl fmt::Display for SoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEvent {
    pub kind: SoundKind,
    pub jid: String,
    pub from: Option<String>,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl MessageEvent {
    pub fn new(kind: SoundKind, jid: impl Into<String>, from: Option<String>) -> Self {
        Self {
            kind,
            jid: jid.into(),
            from,
            message: String::new(),
            received_at: Utc::now(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}
