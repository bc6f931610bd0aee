use crate::error::ConfigError;

/// Top-left corner of a cell, in pixels. Always a multiple of the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector in screen space (y grows downwards).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// The board: a fixed pixel extent split into square cells, wrapping on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, ConfigError> {
        if cell_size <= 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        for (axis, extent) in [("horizontal", width), ("vertical", height)] {
            if extent <= 0 || extent % cell_size != 0 {
                return Err(ConfigError::MisalignedExtent {
                    axis,
                    extent,
                    cell_size,
                });
            }
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Pixel position of the cell at `(column, row)`.
    pub fn cell(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.cell_size, row * self.cell_size)
    }

    /// The cell containing the screen centre, snapped down to the grid.
    pub fn center(&self) -> Position {
        self.cell(self.width / 2 / self.cell_size, self.height / 2 / self.cell_size)
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x)
            && (0..self.height).contains(&position.y)
            && position.x % self.cell_size == 0
            && position.y % self.cell_size == 0
    }

    /// One cell further along `direction`, re-entering from the opposite edge.
    pub fn step(&self, position: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(
            (position.x + dx * self.cell_size).rem_euclid(self.width),
            (position.y + dy * self.cell_size).rem_euclid(self.height),
        )
    }
}
