use std::collections::VecDeque;

use crate::config::Rgb;
use crate::entity::{GameObject, draw_cell};
use crate::geometry::{Direction, Grid, Position};
use crate::render::Renderer;

/// The player's snake. Segments are stored head first.
#[derive(Debug, Clone)]
pub struct Snake {
    grid: Grid,
    positions: VecDeque<Position>,
    /// Target number of segments; the body catches up one cell per move.
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    /// Tail cell dropped by the latest move, still to be erased on screen.
    vacated: Option<Position>,
    head: Position,
    body_color: Rgb,
    background: Rgb,
}

impl Snake {
    pub fn new(grid: Grid, body_color: Rgb, background: Rgb) -> Self {
        let center = grid.center();
        // One spare slot for the head pushed before the tail is popped.
        let mut positions = VecDeque::with_capacity(grid.cell_count() + 1);
        positions.push_front(center);
        Self {
            grid,
            positions,
            length: 1,
            direction: Direction::Right,
            pending_direction: None,
            vacated: None,
            head: center,
            body_color,
            background,
        }
    }

    pub fn head_position(&self) -> Position {
        self.head
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    pub fn segment_count(&self) -> usize {
        self.positions.len()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn vacated(&self) -> Option<Position> {
        self.vacated
    }

    /// Queues a turn for the next move. A turn straight back into the neck is
    /// refused and `false` returned; a later accepted request overrides an
    /// earlier one.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn update_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Advances one cell along the active direction, wrapping at the edges.
    pub fn move_forward(&mut self) {
        let new_head = self.grid.step(self.head, self.direction);
        self.positions.push_front(new_head);

        self.vacated = if self.positions.len() > self.length {
            self.positions.pop_back()
        } else {
            None
        };

        self.head = new_head;
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// True when the head shares a cell with any other segment.
    pub fn bites_itself(&self) -> bool {
        self.positions.iter().skip(1).any(|segment| *segment == self.head)
    }

    pub fn reset(&mut self) {
        let center = self.grid.center();
        self.positions.clear();
        self.positions.push_front(center);
        self.length = 1;
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.vacated = None;
        self.head = center;
    }
}

impl GameObject for Snake {
    fn position(&self) -> Position {
        self.head
    }

    fn body_color(&self) -> Rgb {
        self.body_color
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let size = self.grid.cell_size();

        // Erase before painting: the head may have just moved into the cell
        // the tail left.
        if let Some(vacated) = self.vacated {
            renderer.draw_rect(vacated, size, self.background, 0);
        }

        // Body first so the head ends up on top.
        for segment in self.positions.iter().skip(1) {
            draw_cell(renderer, *segment, size, self.body_color);
        }
        draw_cell(renderer, self.head, size, self.body_color);
    }
}
