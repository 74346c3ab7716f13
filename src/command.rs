use thiserror::Error;

use crate::events::SoundKind;
use crate::host::Console;
use crate::settings::{self, SettingsStore, SoundSettings};

pub const COMMAND_NAME: &str = "/sounds";
pub const MAX_ARGS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundsCommand {
    Status,
    Enable,
    Disable,
    Set { kind: SoundKind, path: String },
    Clear(SoundKind),
    RoomsAdd(String),
    RoomsRemove(String),
    RoomsClear,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("too many arguments: expected at most 3, got {0}")]
    TooManyArguments(usize),
    #[error("unknown subcommand: {0}")]
    UnknownVerb(String),
    #[error("expected chat, room or private after {verb}")]
    UnknownSoundKind { verb: &'static str, found: Option<String> },
    #[error("missing sound file path")]
    MissingPath,
    #[error("expected add, remove or clear after rooms")]
    UnknownRoomsAction(Option<String>),
    #[error("missing room for rooms {0}")]
    MissingRoom(&'static str),
}

impl SoundsCommand {
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, UsageError> {
        if args.len() > MAX_ARGS {
            return Err(UsageError::TooManyArguments(args.len()));
        }

        let arg = |i: usize| nth(args, i);

        let Some(verb) = arg(0) else {
            return Ok(Self::Status);
        };

        match verb {
            "on" => Ok(Self::Enable),
            "off" => Ok(Self::Disable),
            "set" => {
                let kind = parse_kind("set", arg(1))?;
                let path = arg(2).ok_or(UsageError::MissingPath)?;
                Ok(Self::Set {
                    kind,
                    path: path.to_string(),
                })
            }
            "clear" => Ok(Self::Clear(parse_kind("clear", arg(1))?)),
            "rooms" => match arg(1) {
                Some("add") => arg(2)
                    .map(|room| Self::RoomsAdd(room.to_string()))
                    .ok_or(UsageError::MissingRoom("add")),
                Some("remove") => arg(2)
                    .map(|room| Self::RoomsRemove(room.to_string()))
                    .ok_or(UsageError::MissingRoom("remove")),
                Some("clear") => Ok(Self::RoomsClear),
                other => Err(UsageError::UnknownRoomsAction(other.map(str::to_string))),
            },
            other => Err(UsageError::UnknownVerb(other.to_string())),
        }
    }

    pub fn execute(&self, store: &mut dyn SettingsStore, console: &mut dyn Console) {
        match self {
            Self::Status => show_status(&SoundSettings::read(store), console),
            Self::Enable => {
                settings::set_enabled(store, true);
                console.show("Sounds enabled");
            }
            Self::Disable => {
                settings::set_enabled(store, false);
                console.show("Sounds disabled");
            }
            Self::Set { kind, path } => {
                settings::set_sound_file(store, *kind, path);
                console.show(&format!("Set {kind} sound: {path}"));
            }
            Self::Clear(kind) => {
                settings::clear_sound_file(store, *kind);
                console.show(&format!("Removed {kind} sound."));
            }
            Self::RoomsAdd(room) => {
                store.add_to_string_list(settings::SECTION, settings::KEY_ROOMS, room);
                console.show(&format!("Sounds enabled for room: {room}"));
            }
            Self::RoomsRemove(room) => {
                store.remove_from_string_list(settings::SECTION, settings::KEY_ROOMS, room);
                if settings::room_allowlist(store).is_empty() {
                    console.show("Empty room list for sounds, playing in all rooms.");
                } else {
                    console.show(&format!("Sounds disabled for room: {room}"));
                }
            }
            Self::RoomsClear => {
                store.clear_string_list(settings::SECTION, settings::KEY_ROOMS);
                console.show("Cleared sounds room list, playing in all rooms.");
            }
        }
    }
}

fn nth<S: AsRef<str>>(args: &[S], i: usize) -> Option<&str> {
    args.get(i).map(|s| s.as_ref()).filter(|s| !s.is_empty())
}

fn parse_kind(verb: &'static str, arg: Option<&str>) -> Result<SoundKind, UsageError> {
    arg.and_then(SoundKind::parse)
        .ok_or_else(|| UsageError::UnknownSoundKind {
            verb,
            found: arg.map(str::to_string),
        })
}

/// Entry point the host calls with the raw `/sounds` arguments.
///
/// Never fails: bad arguments end in the host's bad-usage notice.
pub fn handle<S: AsRef<str>>(
    args: &[S],
    store: &mut dyn SettingsStore,
    console: &mut dyn Console,
) {
    match SoundsCommand::parse(args) {
        Ok(command) => {
            tracing::debug!(?command, "running /sounds");
            command.execute(store, console);
        }
        Err(err) => {
            tracing::debug!(error = %err, "bad /sounds usage");
            console.bad_usage(COMMAND_NAME);
        }
    }
}

fn show_status(current: &SoundSettings, console: &mut dyn Console) {
    console.show("");

    if !current.any_sound_set() {
        console.show("No sounds set.");
        return;
    }

    console.show(if current.enabled {
        "Sounds: ON"
    } else {
        "Sounds: OFF"
    });

    if let Some(path) = &current.chat_sound {
        console.show(&format!("  Chat    : {path}"));
    }

    if let Some(path) = &current.room_sound {
        console.show(&format!("  Room    : {path}"));
        if current.room_allowlist.is_empty() {
            console.show("    All rooms");
        } else {
            for room in &current.room_allowlist {
                console.show(&format!("    {room}"));
            }
        }
    }

    if let Some(path) = &current.private_sound {
        console.show(&format!("  Private : {path}"));
    }
}
