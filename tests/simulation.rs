use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use torus_snake::entity::GameObject;
use torus_snake::input::InputEvent;
use torus_snake::render::{Canvas, Renderer};
use torus_snake::{Direction, Game, GameConfig, Grid, Palette, Position, Tick};

const NO_INPUT: [InputEvent; 0] = [];
const FAR_CORNER: Position = Position::new(0, 0);

fn new_game(seed: u64) -> (Game, Canvas) {
    let palette = Palette::default();
    let game = Game::with_rng(
        Grid::new(640, 480, 20).unwrap(),
        palette,
        ChaCha8Rng::seed_from_u64(seed),
    );
    let mut canvas = Canvas::new(palette.background, palette.border);
    game.start(&mut canvas);
    (game, canvas)
}

fn turn(direction: Direction) -> [InputEvent; 1] {
    [InputEvent::KeyDown(direction)]
}

#[test]
fn first_tick_eats_food_in_front_of_the_head() {
    let (mut game, mut canvas) = new_game(1);
    let grid = game.grid();
    assert_eq!((grid.columns(), grid.rows()), (32, 24));
    assert_eq!(game.snake().head_position(), Position::new(320, 240));
    assert_eq!(game.snake().direction(), Direction::Right);

    game.food_mut().place_at(Position::new(340, 240));
    let tick = game.tick(NO_INPUT, &mut canvas);

    assert_eq!(tick, Tick::Ate { length: 2 });
    assert_eq!(game.snake().head_position(), Position::new(340, 240));
    assert_eq!(game.snake().segment_count(), 1);
    assert_eq!(game.snake().length(), 2);

    let food = game.food().position();
    assert!(grid.contains(food), "food relocated off the board: {food:?}");
    assert_eq!(food.x % 20, 0);
    assert_eq!(food.y % 20, 0);
}

#[test]
fn reversal_is_ignored_for_the_next_tick() {
    let (mut game, mut canvas) = new_game(2);
    game.food_mut().place_at(FAR_CORNER);

    game.tick(turn(Direction::Left), &mut canvas);

    assert_eq!(game.snake().direction(), Direction::Right);
    assert_eq!(game.snake().head_position(), Position::new(340, 240));
}

#[test]
fn snake_wraps_through_the_top_edge() {
    let (mut game, mut canvas) = new_game(3);
    game.food_mut().place_at(FAR_CORNER);

    game.tick(turn(Direction::Up), &mut canvas);
    for _ in 0..11 {
        game.food_mut().place_at(FAR_CORNER);
        game.tick(NO_INPUT, &mut canvas);
    }
    assert_eq!(game.snake().head_position(), Position::new(320, 0));

    game.food_mut().place_at(FAR_CORNER);
    game.tick(NO_INPUT, &mut canvas);
    assert_eq!(game.snake().head_position(), Position::new(320, 460));
}

#[test]
fn body_grows_at_most_one_segment_per_tick() {
    let (mut game, mut canvas) = new_game(4);
    let grid = game.grid();

    for ticks in 1..=6usize {
        let old_length = game.snake().length();
        let ahead = grid.step(game.snake().head_position(), Direction::Right);
        game.food_mut().place_at(ahead);

        assert_eq!(game.tick(NO_INPUT, &mut canvas), Tick::Ate { length: old_length + 1 });
        assert_eq!(game.snake().length(), old_length + 1);
        assert_eq!(game.snake().segment_count(), (old_length + 1).min(ticks));
    }

    // One quiet tick lets the body catch up with the target length.
    game.food_mut().place_at(FAR_CORNER);
    game.tick(NO_INPUT, &mut canvas);
    assert_eq!(game.snake().segment_count(), game.snake().length());
    assert_eq!(game.stats().food_eaten, 6);
}

#[test]
fn biting_the_body_restarts_the_snake() {
    let (mut game, mut canvas) = new_game(5);
    for _ in 0..4 {
        game.snake_mut().grow();
    }
    for _ in 0..4 {
        game.food_mut().place_at(FAR_CORNER);
        assert_eq!(game.tick(NO_INPUT, &mut canvas), Tick::Moved);
    }

    for direction in [Direction::Up, Direction::Left] {
        game.food_mut().place_at(FAR_CORNER);
        assert_eq!(game.tick(turn(direction), &mut canvas), Tick::Moved);
    }
    game.food_mut().place_at(FAR_CORNER);
    assert_eq!(game.tick(turn(Direction::Down), &mut canvas), Tick::Reset { length: 5 });

    let snake = game.snake();
    assert_eq!(snake.segments().collect::<Vec<_>>(), vec![Position::new(320, 240)]);
    assert_eq!(snake.length(), 1);
    assert_eq!(snake.direction(), Direction::Right);
    assert_eq!(snake.pending_direction(), None);
    assert_eq!(game.stats().resets, 1);

    // The board was wiped, so only the fresh snake and food remain.
    let expected: HashSet<Position> = [Position::new(320, 240), game.food().position()].into();
    let painted: HashSet<Position> = canvas.painted().map(|(position, _)| position).collect();
    assert_eq!(painted, expected);
}

#[test]
fn committing_without_input_keeps_direction() {
    let (mut game, mut canvas) = new_game(6);
    game.food_mut().place_at(FAR_CORNER);
    game.tick(turn(Direction::Down), &mut canvas);
    assert_eq!(game.snake().direction(), Direction::Down);

    game.snake_mut().update_direction();
    game.snake_mut().update_direction();
    assert_eq!(game.snake().direction(), Direction::Down);
}

#[test]
fn screen_only_shows_snake_and_food() {
    let (mut game, mut canvas) = new_game(7);
    let mut keys = ChaCha8Rng::seed_from_u64(99);
    let snake_color = Palette::default().snake;

    for _ in 0..2_000 {
        let events: Vec<InputEvent> = if keys.gen_bool(0.3) {
            vec![InputEvent::KeyDown(Direction::ALL[keys.gen_range(0..4)])]
        } else {
            Vec::new()
        };
        game.tick(events, &mut canvas);
        canvas.present_frame();

        let segments: HashSet<Position> = game.snake().segments().collect();
        for segment in &segments {
            assert_eq!(canvas.color_at(*segment), snake_color, "segment {segment:?} not painted");
        }
        for (position, _) in canvas.painted() {
            assert!(
                segments.contains(&position) || position == game.food().position(),
                "stale paint left at {position:?}",
            );
        }
        assert!(game.snake().segment_count() <= game.snake().length());
    }
    assert_eq!(canvas.frames_presented(), 2_000);
}

#[test]
fn seeded_config_reproduces_a_session() {
    let config = GameConfig {
        seed: Some(2024),
        ..GameConfig::default()
    };
    let palette = config.palette;
    let mut a = Game::new(&config).unwrap();
    let mut b = Game::new(&config).unwrap();
    let mut canvas_a = Canvas::new(palette.background, palette.border);
    let mut canvas_b = Canvas::new(palette.background, palette.border);

    let script = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];
    for step in 0..400 {
        let events = turn(script[(step / 7) % script.len()]);
        assert_eq!(a.tick(events, &mut canvas_a), b.tick(events, &mut canvas_b));
        assert_eq!(a.snake().head_position(), b.snake().head_position());
        assert_eq!(a.food().position(), b.food().position());
    }
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn quit_event_stops_before_any_movement() {
    let (mut game, mut canvas) = new_game(8);
    let before = game.snake().head_position();
    assert_eq!(game.tick([InputEvent::Quit], &mut canvas), Tick::Quit);
    assert_eq!(game.snake().head_position(), before);
}
