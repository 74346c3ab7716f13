pub mod audio;
pub mod cli;
pub mod command;
pub mod config;
pub mod events;
pub mod hooks;
pub mod host;
pub mod registration;
pub mod settings;

use anyhow::Context;
use cli::{Cli, Commands};
use events::{MessageEvent, SoundKind};
use host::{StaticRooms, StdoutConsole};
use settings::FileSettings;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Sounds(args) => sounds(args),
        Commands::Event(args) => event(args),
        Commands::Describe(args) => describe(args),
        Commands::Config(args) => config_cmd(args),
    }
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn open_settings(config: &config::Config) -> anyhow::Result<FileSettings> {
    let path = config.settings_path()?;
    FileSettings::open(&path)
}

fn sounds(args: cli::SoundsArgs) -> anyhow::Result<()> {
    let config = config::Config::load().context("load config")?;
    let mut settings = open_settings(&config)?;
    let mut console = StdoutConsole;

    command::handle(args.args.as_slice(), &mut settings, &mut console);

    settings.save().context("save settings")
}

fn event(args: cli::EventArgs) -> anyhow::Result<()> {
    let config = config::Config::load().context("load config")?;
    let settings = open_settings(&config)?;
    let player = audio::ProcessPlayer::new(&config.player);

    let mut rooms = StaticRooms::new();
    if let Some(my_nick) = args.my_nick {
        if args.kind == SoundKind::Room {
            rooms = rooms.join(args.jid.clone(), my_nick);
        }
    }

    let event = MessageEvent::new(args.kind, args.jid, args.nick)
        .with_message(args.message.unwrap_or_default());

    hooks::Hooks::new(&settings, &rooms, &player).dispatch(&event);
    Ok(())
}

fn describe(args: cli::DescribeArgs) -> anyhow::Result<()> {
    let registration = registration::describe();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&registration)?);
        return Ok(());
    }

    let cmd = &registration.command;
    println!("{}", cmd.name);
    println!("{}", cmd.description);
    println!();
    println!("Synopsis:");
    for line in cmd.synopsis {
        println!("  {line}");
    }
    println!();
    println!("Arguments:");
    for (arg, help) in cmd.args {
        println!("  {arg:<24} {help}");
    }
    println!();
    println!("Examples:");
    for example in cmd.examples {
        println!("  {example}");
    }

    Ok(())
}

fn config_cmd(args: cli::ConfigArgs) -> anyhow::Result<()> {
    if args.init {
        let path = config::Config::init_default()?;
        println!("Initialized config at {}", path.display());
        return Ok(());
    }

    if args.show {
        let config = config::Config::load()?;
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if args.validate {
        let config = config::Config::load()?;
        config.validate()?;
        println!("Config OK");
        return Ok(());
    }

    let path = config::Config::default_path()?;
    println!("{}", path.display());
    Ok(())
}
