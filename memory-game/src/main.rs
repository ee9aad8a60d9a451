use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use memory_game::{Answer, Backend, Config, FIRST_TURN, MAX_TURNS};
use runner::{Solver, Source};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();

    let app: App = App::parse();
    app.run()
}

/// Memory game: the numbers spoken on two turns
#[derive(Debug, Parser)]
#[clap(version)]
struct App {
    /// Optional path to input file. If not supplied, will read from STDIN.
    #[clap(short = 'i', long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Turn reported by part 1
    #[clap(short = 'f', long, default_value_t = FIRST_TURN)]
    first_turn: u32,

    /// Turn reported by part 2; the turn table is sized to it
    #[clap(short = 'm', long, default_value_t = MAX_TURNS)]
    max_turns: u32,

    /// Turn table storage, `flat` or `sparse`
    #[clap(short = 'b', long, default_value = "flat")]
    backend: Backend,
}

impl App {
    fn run(&self) -> Result<()> {
        let config = Config {
            first_turn: self.first_turn,
            max_turns: self.max_turns,
            backend: self.backend,
        };
        config.validate()?;

        Answer::new(config).solve(&Source::from_path(self.input.clone()))
    }
}
