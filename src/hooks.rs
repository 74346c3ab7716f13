use crate::audio::SoundPlayer;
use crate::events::{MessageEvent, SoundKind};
use crate::host::RoomDirectory;
use crate::settings::{self, SettingsStore};

pub struct Hooks<'a> {
    pub settings: &'a dyn SettingsStore,
    pub rooms: &'a dyn RoomDirectory,
    pub player: &'a dyn SoundPlayer,
}

impl<'a> Hooks<'a> {
    pub fn new(
        settings: &'a dyn SettingsStore,
        rooms: &'a dyn RoomDirectory,
        player: &'a dyn SoundPlayer,
    ) -> Self {
        Self {
            settings,
            rooms,
            player,
        }
    }

    pub fn dispatch(&self, event: &MessageEvent) {
        tracing::debug!(
            kind = %event.kind,
            jid = %event.jid,
            received_at = %event.received_at,
            "message displayed"
        );

        let from = event.from.as_deref().unwrap_or("");
        match event.kind {
            SoundKind::Chat => self.on_chat_message(&event.jid, from, &event.message),
            SoundKind::Room => self.on_room_message(&event.jid, from, &event.message),
            SoundKind::Private => self.on_private_message(&event.jid, from, &event.message),
        }
    }

    pub fn on_chat_message(&self, _jid: &str, _resource: &str, _message: &str) {
        if let Some(sound_file) = self.enabled_sound(SoundKind::Chat) {
            self.player.play(&sound_file);
        }
    }

    pub fn on_room_message(&self, room: &str, nick: &str, _message: &str) {
        let Some(my_nick) = self.rooms.room_nick(room).filter(|n| !n.is_empty()) else {
            tracing::debug!(room, "own nickname unknown; skipping");
            return;
        };

        if my_nick == nick {
            return;
        }

        let Some(sound_file) = self.enabled_sound(SoundKind::Room) else {
            return;
        };

        let allowlist = settings::room_allowlist(self.settings);
        if !allowlist.is_empty() && !allowlist.iter().any(|r| r == room) {
            tracing::debug!(room, "room not in allow-list; skipping");
            return;
        }

        self.player.play(&sound_file);
    }

    pub fn on_private_message(&self, _room: &str, _nick: &str, _message: &str) {
        if let Some(sound_file) = self.enabled_sound(SoundKind::Private) {
            self.player.play(&sound_file);
        }
    }

    fn enabled_sound(&self, kind: SoundKind) -> Option<String> {
        if !settings::enabled(self.settings) {
            tracing::debug!(%kind, "sounds disabled; skipping");
            return None;
        }

        let sound_file = settings::sound_file(self.settings, kind);
        if sound_file.is_none() {
            tracing::debug!(%kind, "no sound configured; skipping");
        }
        sound_file
    }
}
