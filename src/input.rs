use crate::geometry::Direction;
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Direction),
    /// Anything the game does not react to.
    Other,
}

/// Source of input events, drained once per tick without blocking.
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Applies one tick's events to the snake's pending direction.
///
/// Stops at the first `Quit`; anything after it is not applied.
pub fn handle_events<I>(snake: &mut Snake, events: I) -> Control
where
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        match event {
            InputEvent::Quit => return Control::Quit,
            InputEvent::KeyDown(direction) => {
                snake.request_direction(direction);
            }
            InputEvent::Other => {}
        }
    }
    Control::Continue
}
