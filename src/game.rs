use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{GameConfig, Palette};
use crate::entity::GameObject;
use crate::error::ConfigError;
use crate::food::Food;
use crate::geometry::Grid;
use crate::input::{Control, InputEvent, handle_events};
use crate::render::Renderer;
use crate::snake::Snake;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Quit,
    Moved,
    Ate { length: usize },
    /// The snake ran into itself after reaching `length` and was restarted.
    Reset { length: usize },
}

/// Counters for the current process; nothing here is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub food_eaten: u64,
    pub resets: u64,
    pub best_length: usize,
}

pub struct Game {
    grid: Grid,
    palette: Palette,
    snake: Snake,
    food: Food,
    rng: ChaCha8Rng,
    stats: SessionStats,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self::with_rng(config.grid()?, config.palette, rng))
    }

    pub fn with_rng(grid: Grid, palette: Palette, mut rng: ChaCha8Rng) -> Self {
        let snake = Snake::new(grid, palette.snake, palette.background);
        let food = Food::new(grid, palette.food, &mut rng);
        Self {
            grid,
            palette,
            snake,
            food,
            rng,
            stats: SessionStats {
                best_length: 1,
                ..SessionStats::default()
            },
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Paints the empty board before the first tick.
    pub fn start(&self, renderer: &mut dyn Renderer) {
        renderer.clear(self.palette.background);
    }

    /// Runs one simulation step and draws its result. Presenting the frame is
    /// left to the caller.
    pub fn tick<I>(&mut self, events: I, renderer: &mut dyn Renderer) -> Tick
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if handle_events(&mut self.snake, events) == Control::Quit {
            return Tick::Quit;
        }
        self.stats.ticks += 1;

        self.snake.update_direction();
        self.snake.move_forward();
        let head = self.snake.head_position();

        let mut outcome = Tick::Moved;

        if head == self.food.position() {
            self.snake.grow();
            self.food.randomize_position(&mut self.rng);
            self.stats.food_eaten += 1;
            self.stats.best_length = self.stats.best_length.max(self.snake.length());
            debug!(
                "ate food at {:?}, length now {}, next food at {:?}",
                head,
                self.snake.length(),
                self.food.position()
            );
            outcome = Tick::Ate {
                length: self.snake.length(),
            };
        }

        if self.snake.bites_itself() {
            let length = self.snake.length();
            self.snake.reset();
            renderer.clear(self.palette.background);
            self.food.randomize_position(&mut self.rng);
            self.stats.resets += 1;
            info!("snake bit itself at length {length}, restarting");
            outcome = Tick::Reset { length };
        }

        self.food.draw(renderer);
        self.snake.draw(renderer);
        outcome
    }
}
