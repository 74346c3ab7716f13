pub mod player;

pub use player::{expand_home, ProcessPlayer, SoundPlayer};
