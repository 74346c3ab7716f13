use std::collections::HashMap;

pub trait Console {
    fn show(&mut self, line: &str);

    fn bad_usage(&mut self, command: &str);
}

pub trait RoomDirectory {
    fn room_nick(&self, room: &str) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn show(&mut self, line: &str) {
        println!("{line}");
    }

    fn bad_usage(&mut self, command: &str) {
        println!("{}", bad_usage_message(command));
    }
}

pub fn bad_usage_message(command: &str) -> String {
    let topic = command.trim_start_matches('/');
    format!("Invalid usage, see '/help {topic}' for details.")
}

#[derive(Debug, Clone, Default)]
pub struct StaticRooms {
    nicks: HashMap<String, String>,
}

impl StaticRooms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(mut self, room: impl Into<String>, nick: impl Into<String>) -> Self {
        self.nicks.insert(room.into(), nick.into());
        self
    }
}

impl RoomDirectory for StaticRooms {
    fn room_nick(&self, room: &str) -> Option<String> {
        self.nicks.get(room).cloned()
    }
}
