use serde::Serialize;

use crate::command::{COMMAND_NAME, MAX_ARGS};

#[derive(Debug, Clone, Serialize)]
pub struct CommandSpec {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub synopsis: &'static [&'static str],
    pub description: &'static str,
    pub args: &'static [(&'static str, &'static str)],
    pub examples: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Completer {
    pub prefix: &'static str,
    pub items: &'static [&'static str],
}

pub trait Registrar {
    fn register_command(&mut self, spec: &CommandSpec);
    fn completer_add(&mut self, prefix: &str, items: &[&str]);
    fn filepath_completer_add(&mut self, prefix: &str);
}

pub const SOUNDS_COMMAND: CommandSpec = CommandSpec {
    name: COMMAND_NAME,
    min_args: 0,
    max_args: MAX_ARGS,
    synopsis: &[
        "/sounds",
        "/sounds on|off",
        "/sounds set chat <file>",
        "/sounds set room <file>",
        "/sounds set private <file>",
        "/sounds clear chat",
        "/sounds clear room",
        "/sounds clear private",
        "/sounds rooms add <roomjid>",
        "/sounds rooms remove <roomjid>",
        "/sounds rooms clear",
    ],
    description: "Play sounds on chat, room and private messages. \
                  Calling with no args shows the current sound files.",
    args: &[
        ("on|off", "Enable or disable playing sounds."),
        ("set chat <file>", "Path to the sound file to play on chat messages."),
        ("set room <file>", "Path to the sound file to play on room messages."),
        ("set private <file>", "Path to the sound file to play on private room messages."),
        ("clear chat", "Remove the sound for chat messages."),
        ("clear room", "Remove the sound for room messages."),
        ("clear private", "Remove the sound for private messages."),
        ("rooms add <roomjid>", "Add the room to the list that will play the room sound."),
        ("rooms remove <roomjid>", "Remove the room from the list that will play the room sound."),
        ("rooms clear", "Clear the room list, all rooms will play sounds on new messages."),
    ],
    examples: &[
        "/sounds set chat ~/sounds/woof.mp3",
        "/sounds set room ~/sounds/meow.mp3",
        "/sounds set private ~/sounds/shhh.mp3",
        "/sounds clear private",
        "/sounds rooms add myroom@conference.server.org",
        "/sounds on",
    ],
};

pub const COMPLETERS: &[Completer] = &[
    Completer {
        prefix: "/sounds",
        items: &["set", "clear", "on", "off", "rooms"],
    },
    Completer {
        prefix: "/sounds set",
        items: &["chat", "room", "private"],
    },
    Completer {
        prefix: "/sounds clear",
        items: &["chat", "room", "private"],
    },
    Completer {
        prefix: "/sounds rooms",
        items: &["add", "remove", "clear"],
    },
];

pub const FILEPATH_COMPLETERS: &[&str] = &[
    "/sounds set chat",
    "/sounds set room",
    "/sounds set private",
];

pub fn register(registrar: &mut dyn Registrar) {
    registrar.register_command(&SOUNDS_COMMAND);
    for completer in COMPLETERS {
        registrar.completer_add(completer.prefix, completer.items);
    }
    for prefix in FILEPATH_COMPLETERS {
        registrar.filepath_completer_add(prefix);
    }
}

pub fn completions_for(prefix: &str) -> Option<&'static [&'static str]> {
    let prefix = prefix.trim();
    COMPLETERS
        .iter()
        .find(|completer| completer.prefix == prefix)
        .map(|completer| completer.items)
}

pub fn completes_filepath(prefix: &str) -> bool {
    FILEPATH_COMPLETERS.contains(&prefix.trim())
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub command: CommandSpec,
    pub completers: &'static [Completer],
    pub filepath_completers: &'static [&'static str],
}

pub fn describe() -> Registration {
    Registration {
        command: SOUNDS_COMMAND,
        completers: COMPLETERS,
        filepath_completers: FILEPATH_COMPLETERS,
    }
}
