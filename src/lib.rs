//! Torus Snake - a grid snake game whose board wraps around at every edge.
//!
//! The simulation (geometry, entities, input mapping, per-tick step) is
//! independent of any window; `backend` plugs it into macroquad.

pub mod backend;
pub mod clock;
pub mod config;
pub mod entity;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod snake;

pub use config::{GameConfig, Palette, Rgb};
pub use error::ConfigError;
pub use game::{Game, Tick};
pub use geometry::{Direction, Grid, Position};
