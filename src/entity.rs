use crate::config::Rgb;
use crate::geometry::Position;
use crate::render::Renderer;

/// Border drawn around every occupied cell.
pub const CELL_BORDER_WIDTH: u32 = 1;

/// Anything on the board with a position and a color that can paint itself.
pub trait GameObject {
    fn position(&self) -> Position;

    fn body_color(&self) -> Rgb;

    fn draw(&self, renderer: &mut dyn Renderer);
}

/// Paints one occupied cell: filled body with the standard border.
pub(crate) fn draw_cell(renderer: &mut dyn Renderer, position: Position, size: i32, color: Rgb) {
    renderer.draw_rect(position, size, color, CELL_BORDER_WIDTH);
}
