#![allow(dead_code)]

use prof_sounds::audio::SoundPlayer;
use prof_sounds::command;
use prof_sounds::host::{bad_usage_message, Console};
use prof_sounds::settings::MemorySettings;
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct RecordingConsole {
    pub lines: Vec<String>,
}

impl Console for RecordingConsole {
    fn show(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn bad_usage(&mut self, command: &str) {
        self.lines.push(bad_usage_message(command));
    }
}

#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub played: RefCell<Vec<String>>,
}

impl RecordingPlayer {
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&self, sound_file: &str) {
        self.played.borrow_mut().push(sound_file.to_string());
    }
}

/// Runs `/sounds` with the whitespace-separated `line` and returns what it
/// printed.
pub fn run(store: &mut MemorySettings, line: &str) -> Vec<String> {
    let args: Vec<&str> = line.split_whitespace().collect();
    let mut console = RecordingConsole::default();
    command::handle(args.as_slice(), store, &mut console);
    console.lines
}
