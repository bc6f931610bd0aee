//! macroquad implementations of the render and input contracts.

use macroquad::color::Color;
use macroquad::input::{KeyCode, get_keys_pressed, is_key_pressed, is_quit_requested, prevent_quit};
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::window::{Conf, clear_background};

use crate::config::{GameConfig, Palette, Rgb};
use crate::geometry::{Direction, Position};
use crate::input::{InputEvent, InputSource};
use crate::render::{Canvas, Renderer};

const KEY_BINDINGS: [(KeyCode, Direction); 8] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
    (KeyCode::W, Direction::Up),
    (KeyCode::S, Direction::Down),
    (KeyCode::A, Direction::Left),
    (KeyCode::D, Direction::Right),
];

pub fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.screen_width,
        window_height: config.screen_height,
        window_resizable: false,
        ..Default::default()
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::from_rgba(r, g, b, 255)
}

pub fn map_key(key: KeyCode) -> InputEvent {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map_or(InputEvent::Other, |(_, direction)| {
            InputEvent::KeyDown(*direction)
        })
}

/// macroquad swaps buffers every frame, so painted cells are kept in a
/// `Canvas` and replayed in full on present.
pub struct MacroquadRenderer {
    canvas: Canvas,
}

impl MacroquadRenderer {
    pub fn new(palette: &Palette) -> Self {
        Self {
            canvas: Canvas::new(palette.background, palette.border),
        }
    }
}

impl Renderer for MacroquadRenderer {
    fn draw_rect(&mut self, position: Position, size: i32, fill: Rgb, border_width: u32) {
        self.canvas.draw_rect(position, size, fill, border_width);
    }

    fn clear(&mut self, background: Rgb) {
        self.canvas.clear(background);
    }

    fn present_frame(&mut self) {
        clear_background(to_color(self.canvas.background()));
        let border = to_color(self.canvas.border());

        for (position, paint) in self.canvas.painted() {
            let (x, y, size) = (position.x as f32, position.y as f32, paint.size as f32);
            draw_rectangle(x, y, size, size, to_color(paint.fill));
            if paint.border_width > 0 {
                draw_rectangle_lines(x, y, size, size, paint.border_width as f32, border);
            }
        }

        self.canvas.present_frame();
    }
}

/// Keyboard and window events for the current macroquad frame.
pub struct MacroquadInput;

impl MacroquadInput {
    /// Takes over the window close button so closing goes through the game loop.
    pub fn new() -> Self {
        prevent_quit();
        Self
    }
}

impl InputSource for MacroquadInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }

        // Bound keys in a fixed order; the pressed-key set itself is unordered.
        for (key, direction) in KEY_BINDINGS {
            if is_key_pressed(key) {
                events.push(InputEvent::KeyDown(direction));
            }
        }
        events.extend(
            get_keys_pressed()
                .into_iter()
                .map(map_key)
                .filter(|event| *event == InputEvent::Other),
        );
        events
    }
}
