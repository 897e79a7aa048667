mod config;
mod game_loop;
mod render;

use clap::{Parser, ValueEnum};
use engine::log;
use engine::logger::init_logger;
use engine::session_rng::SessionRng;
use engine::tictactoe::{BotType, FirstPlayerMode, Mark};

use config::get_config_manager;
use game_loop::{GameOptions, ask_play_again, run_game};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Console tic-tac-toe against a bot")]
struct Args {
    /// Bot opponent type
    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    /// Who makes the first move (the first mover plays X)
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Pause in milliseconds before each bot move
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for the session RNG (random bot, random first player)
    #[arg(long)]
    seed: Option<u64>,

    /// Persist the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum BotArg {
    Random,
    Minimax,
}

impl BotArg {
    fn to_bot_type(self) -> BotType {
        match self {
            BotArg::Random => BotType::Random,
            BotArg::Minimax => BotType::Minimax,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Bot,
    Random,
}

impl FirstArg {
    fn to_first_player_mode(self) -> FirstPlayerMode {
        match self {
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Bot => FirstPlayerMode::Bot,
            FirstArg::Random => FirstPlayerMode::Random,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logger(Some("tictactoe".to_string()));

    let config_manager = get_config_manager();
    let mut config = config_manager.get_config()?;

    if let Some(bot) = args.bot {
        config.bot_type = bot.to_bot_type();
    }
    if let Some(first) = args.first {
        config.first_player = first.to_first_player_mode();
    }
    if let Some(delay_ms) = args.delay_ms {
        config.bot_delay_ms = delay_ms;
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    loop {
        let human_first = match config.first_player {
            FirstPlayerMode::Human => true,
            FirstPlayerMode::Bot => false,
            FirstPlayerMode::Random => rng.random_bool(),
        };
        let player_mark = if human_first { Mark::X } else { Mark::O };
        log!(
            "You play {}, bot plays {}",
            player_mark.symbol(),
            match player_mark.opponent() {
                Some(mark) => mark.symbol(),
                None => '?',
            }
        );

        let options = GameOptions {
            player_mark,
            bot_type: config.bot_type,
            bot_delay_ms: config.bot_delay_ms,
        };
        run_game(&options, &mut rng)?;

        if !ask_play_again()? {
            break;
        }
    }

    Ok(())
}
