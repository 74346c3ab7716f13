use directories::BaseDirs;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::config::PlayerConfig;

pub trait SoundPlayer {
    fn play(&self, sound_file: &str);
}

/// Plays sounds by launching an external player process per call.
///
/// The child is spawned detached with null stdio and is never blocked on, so
/// a slow or hung player cannot block the caller. Overlapping calls run
/// overlapping players. Exited children are reaped by a non-blocking sweep
/// on the next `play`.
#[derive(Debug)]
pub struct ProcessPlayer {
    program: String,
    quiet_flag: String,
    home: Option<PathBuf>,
    children: RefCell<Vec<Child>>,
}

impl ProcessPlayer {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            program: config.program.clone(),
            quiet_flag: config.quiet_flag.clone(),
            home: BaseDirs::new().map(|base| base.home_dir().to_path_buf()),
            children: RefCell::new(Vec::new()),
        }
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn command(&self, sound_file: &str) -> Command {
        let path = expand_home(sound_file, self.home.as_deref());
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.quiet_flag)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    /// Collects players that have exited without blocking on the rest.
    /// Returns how many are still running.
    pub fn reap(&self) -> usize {
        let mut children = self.children.borrow_mut();
        children.retain_mut(|child| match child.try_wait() {
            Ok(Some(_)) => false,
            Ok(None) => true,
            Err(err) => {
                tracing::debug!(error = ?err, pid = child.id(), "player poll failed");
                false
            }
        });
        children.len()
    }
}

impl SoundPlayer for ProcessPlayer {
    fn play(&self, sound_file: &str) {
        self.reap();

        let mut cmd = self.command(sound_file);
        match cmd.spawn() {
            Ok(child) => {
                tracing::debug!(pid = child.id(), program = %self.program, sound_file, "player spawned");
                self.children.borrow_mut().push(child);
            }
            Err(err) => {
                tracing::debug!(error = ?err, program = %self.program, sound_file, "player spawn failed");
            }
        }
    }
}

pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
