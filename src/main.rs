use anyhow::Result;
use log::{LevelFilter, info, warn};
use macroquad::window::{Conf, next_frame};
use simplelog::{Config, SimpleLogger};

use torus_snake::backend::{self, MacroquadInput, MacroquadRenderer};
use torus_snake::clock::{Clock, FrameClock};
use torus_snake::config::CONFIG_PATH;
use torus_snake::input::InputSource;
use torus_snake::render::Renderer;
use torus_snake::{Game, GameConfig, Tick};

fn window_conf() -> Conf {
    // Runs before the logger exists; problems are reported again from main.
    backend::window_conf(&GameConfig::load(CONFIG_PATH).unwrap_or_default())
}

fn load_config() -> GameConfig {
    let loaded = GameConfig::load(CONFIG_PATH);
    let level = loaded
        .as_ref()
        .map_or(LevelFilter::Info, |config| config.log_level);
    if SimpleLogger::init(level, Config::default()).is_err() {
        eprintln!("logger already initialised");
    }

    loaded.unwrap_or_else(|err| {
        warn!("{err}; using default settings");
        GameConfig::default()
    })
}

async fn run(config: GameConfig) -> Result<()> {
    let mut game = Game::new(&config)?;
    let mut renderer = MacroquadRenderer::new(&config.palette);
    let mut input = MacroquadInput::new();
    let mut clock = FrameClock::new();

    let grid = game.grid();
    info!(
        "starting on a {}x{} board ({}px cells) at {} ticks/s",
        grid.columns(),
        grid.rows(),
        grid.cell_size(),
        config.tick_rate
    );

    game.start(&mut renderer);

    loop {
        clock.tick(config.tick_rate);

        if game.tick(input.poll_events(), &mut renderer) == Tick::Quit {
            break;
        }
        renderer.present_frame();

        next_frame().await;
    }

    let stats = game.stats();
    info!(
        "quit after {} ticks: {} food eaten, {} restarts, best length {}",
        stats.ticks, stats.food_eaten, stats.resets, stats.best_length
    );
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = load_config();
    if let Err(err) = run(config).await {
        log::error!("{err:#}");
    }
}
