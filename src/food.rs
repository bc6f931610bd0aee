use rand::Rng;

use crate::config::Rgb;
use crate::entity::{GameObject, draw_cell};
use crate::geometry::{Grid, Position};
use crate::render::Renderer;

/// The single food item. It may land on a cell the snake occupies.
#[derive(Debug, Clone)]
pub struct Food {
    grid: Grid,
    position: Position,
    body_color: Rgb,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(grid: Grid, body_color: Rgb, rng: &mut R) -> Self {
        let mut food = Self {
            grid,
            position: Position::new(0, 0),
            body_color,
        };
        food.randomize_position(rng);
        food
    }

    /// Moves to a uniformly random cell of the board.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let column = rng.gen_range(0..self.grid.columns());
        let row = rng.gen_range(0..self.grid.rows());
        self.position = self.grid.cell(column, row);
    }

    pub fn place_at(&mut self, position: Position) {
        debug_assert!(self.grid.contains(position));
        self.position = position;
    }
}

impl GameObject for Food {
    fn position(&self) -> Position {
        self.position
    }

    fn body_color(&self) -> Rgb {
        self.body_color
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        draw_cell(renderer, self.position, self.grid.cell_size(), self.body_color);
    }
}
