//! Drawing contract between the simulation and whatever owns the screen.

use std::collections::HashMap;

use crate::config::Rgb;
use crate::geometry::Position;

/// The surface entities paint themselves onto.
///
/// Painting is retained: a cell keeps its color until something paints over
/// it or the surface is cleared, so entities only repaint what changed.
pub trait Renderer {
    /// Paints a `size`-pixel square at `position`, outlined with a
    /// `border_width`-pixel border in the surface's border color (0 for none).
    fn draw_rect(&mut self, position: Position, size: i32, fill: Rgb, border_width: u32);

    /// Fills the whole surface with `background`, forgetting everything painted.
    fn clear(&mut self, background: Rgb);

    /// Commits everything drawn so far as one frame.
    fn present_frame(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub size: i32,
    pub fill: Rgb,
    pub border_width: u32,
}

/// Retained in-memory surface. Backends without a persistent framebuffer
/// replay it every frame; tests inspect it directly.
#[derive(Debug, Clone)]
pub struct Canvas {
    background: Rgb,
    border: Rgb,
    cells: HashMap<Position, Paint>,
    frames_presented: u64,
}

impl Canvas {
    pub fn new(background: Rgb, border: Rgb) -> Self {
        Self {
            background,
            border,
            cells: HashMap::new(),
            frames_presented: 0,
        }
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn border(&self) -> Rgb {
        self.border
    }

    pub fn paint_at(&self, position: Position) -> Option<Paint> {
        self.cells.get(&position).copied()
    }

    /// Color visible at `position`: the painted fill, or the background.
    pub fn color_at(&self, position: Position) -> Rgb {
        self.paint_at(position)
            .map_or(self.background, |paint| paint.fill)
    }

    pub fn painted(&self) -> impl Iterator<Item = (Position, Paint)> + '_ {
        self.cells.iter().map(|(position, paint)| (*position, *paint))
    }

    pub fn painted_count(&self) -> usize {
        self.cells.len()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Renderer for Canvas {
    fn draw_rect(&mut self, position: Position, size: i32, fill: Rgb, border_width: u32) {
        // Borderless background paint is an erase.
        if fill == self.background && border_width == 0 {
            self.cells.remove(&position);
            return;
        }
        self.cells.insert(
            position,
            Paint {
                size,
                fill,
                border_width,
            },
        );
    }

    fn clear(&mut self, background: Rgb) {
        self.background = background;
        self.cells.clear();
    }

    fn present_frame(&mut self) {
        self.frames_presented += 1;
    }
}
