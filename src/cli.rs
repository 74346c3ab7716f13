use clap::{Args, Parser, Subcommand};

use crate::events::SoundKind;

#[derive(Parser, Debug)]
#[command(name = "prof-sounds", version, about = "Notification sounds for chat, room and private messages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Sounds(SoundsArgs),
    Event(EventArgs),
    Describe(DescribeArgs),
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct SoundsArgs {
    #[arg(
        value_name = "ARG",
        num_args = 0..,
        allow_hyphen_values = true,
        help = "Arguments to /sounds, e.g. `set chat ~/ping.mp3`"
    )]
    pub args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EventArgs {
    #[arg(value_enum, help = "Kind of message that was displayed")]
    pub kind: SoundKind,

    #[arg(long, help = "Bare JID of the contact or room")]
    pub jid: String,

    #[arg(long, alias = "resource", help = "Sender nickname (room, private) or resource (chat)")]
    pub nick: Option<String>,

    #[arg(long, help = "Own nickname in the room")]
    pub my_nick: Option<String>,

    #[arg(value_name = "MESSAGE", help = "Message text")]
    pub message: Option<String>,
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[arg(long, help = "Show current config as JSON")]
    pub show: bool,

    #[arg(long, help = "Create default config file")]
    pub init: bool,

    #[arg(long, help = "Validate configuration")]
    pub validate: bool,
}
