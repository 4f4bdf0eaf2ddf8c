//! Active pair control tests: moves, rotation table, gravity and locking

use tui_puyo::core::systems::{
    can_rotate, check_lose, move_pair, place_blob, rotate_pair, spawn_pair, try_move_pair,
};
use tui_puyo::core::{ColorSource, Game, Grid, Pair, Phase, Transform};
use tui_puyo::ecs::{Coordinator, Entity};
use tui_puyo::types::{BlobColor, Direction, IPoint, InputSnapshot, Key, Shape, GRID_WIDTH};

const DT: f32 = 1.0 / 60.0;

fn cells(ecs: &Coordinator, pair: Entity) -> (IPoint, IPoint) {
    let p = *ecs.get::<Pair>(pair).unwrap();
    (
        ecs.get::<Transform>(p.center).unwrap().grid,
        ecs.get::<Transform>(p.other).unwrap().grid,
    )
}

fn shape(ecs: &Coordinator, pair: Entity) -> Shape {
    let (c, o) = cells(ecs, pair);
    Shape::from_positions((c.x, c.y), (o.x, o.y))
}

fn spawned_game(seed: u64) -> (Game, Entity) {
    let mut game = Game::new(seed).unwrap();
    game.tick(DT).unwrap();
    let pair = game.session().pair.unwrap();
    (game, pair)
}

fn press(key: Key) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    input.set(key, true);
    input
}

#[test]
fn spawned_pair_is_vertical_at_the_left_wall() {
    let (game, pair) = spawned_game(3);
    assert_eq!(
        cells(game.coordinator(), pair),
        (IPoint::new(0, 0), IPoint::new(0, 1))
    );
    assert_eq!(shape(game.coordinator(), pair), Shape::Down);
}

#[test]
fn left_rotation_at_the_left_wall_needs_the_cell_to_the_right() {
    let (mut game, pair) = spawned_game(3);
    let (ecs, s) = game.world_mut();
    let s = *s;

    let blocker = place_blob(ecs, s.grid, BlobColor::Green, IPoint::new(1, 0))
        .unwrap()
        .unwrap();
    assert!(!can_rotate(ecs, s.grid, pair, Direction::Left).unwrap());
    assert!(!rotate_pair(ecs, s.grid, pair, Direction::Left).unwrap());
    assert_eq!(cells(ecs, pair), (IPoint::new(0, 0), IPoint::new(0, 1)));

    ecs.get_mut::<Grid>(s.grid).unwrap().clear(IPoint::new(1, 0));
    ecs.destroy_entity(blocker).unwrap();
    assert!(rotate_pair(ecs, s.grid, pair, Direction::Left).unwrap());
    assert_eq!(cells(ecs, pair), (IPoint::new(0, 0), IPoint::new(1, 0)));
    assert_eq!(shape(ecs, pair), Shape::Right);
}

#[test]
fn up_shape_at_the_left_wall_cannot_turn_left() {
    let (mut game, pair) = spawned_game(3);
    let (ecs, s) = game.world_mut();
    let s = *s;
    // Down -> Right -> Up, moved away from the top so `other` fits above.
    for _ in 0..40 {
        try_move_pair(ecs, s.grid, pair, DT).unwrap();
    }
    assert!(rotate_pair(ecs, s.grid, pair, Direction::Left).unwrap());
    assert!(rotate_pair(ecs, s.grid, pair, Direction::Left).unwrap());
    assert_eq!(shape(ecs, pair), Shape::Up);

    let before = cells(ecs, pair);
    assert!(!rotate_pair(ecs, s.grid, pair, Direction::Left).unwrap());
    assert_eq!(cells(ecs, pair), before);
}

#[test]
fn full_clockwise_turn_returns_to_the_start() {
    let (mut game, pair) = spawned_game(5);
    let (ecs, s) = game.world_mut();
    let s = *s;
    move_pair(ecs, s.grid, pair, Direction::Right).unwrap();
    move_pair(ecs, s.grid, pair, Direction::Right).unwrap();
    for _ in 0..40 {
        try_move_pair(ecs, s.grid, pair, DT).unwrap();
    }
    let start = cells(ecs, pair);
    let mut seen = vec![shape(ecs, pair)];
    for _ in 0..4 {
        assert!(rotate_pair(ecs, s.grid, pair, Direction::Right).unwrap());
        seen.push(shape(ecs, pair));
        // `center` never moves.
        assert_eq!(cells(ecs, pair).0, start.0);
    }
    assert_eq!(
        seen,
        vec![Shape::Down, Shape::Left, Shape::Up, Shape::Right, Shape::Down]
    );
    assert_eq!(cells(ecs, pair), start);
    assert_eq!(ecs.get::<Grid>(s.grid).unwrap().occupied_count(), 2);
}

#[test]
fn pair_cannot_leave_the_board() {
    let (mut game, pair) = spawned_game(8);
    let (ecs, s) = game.world_mut();
    let s = *s;
    let mut moves = 0;
    while move_pair(ecs, s.grid, pair, Direction::Right).unwrap() {
        moves += 1;
    }
    assert_eq!(moves, GRID_WIDTH - 1);
    assert_eq!(cells(ecs, pair).0.x, GRID_WIDTH as i32 - 1);
}

#[test]
fn input_moves_the_pair_only_on_the_press_edge() {
    let (mut game, pair) = spawned_game(2);
    let mut input = press(Key::Right);
    game.handle_input(&input).unwrap();
    input.advance();
    game.handle_input(&input).unwrap();
    assert_eq!(cells(game.coordinator(), pair).0, IPoint::new(1, 0));
}

#[test]
fn soft_drop_locks_sooner() {
    fn ticks_to_lock(soft: bool) -> usize {
        let mut game = Game::new(4).unwrap();
        game.tick(DT).unwrap();
        let mut input = InputSnapshot::default();
        input.set(Key::Down, soft);
        let mut ticks = 0;
        while game.phase() == Phase::Pair {
            game.handle_input(&input).unwrap();
            input.advance();
            game.tick(DT).unwrap();
            ticks += 1;
            assert!(ticks < 10_000);
        }
        ticks
    }
    let normal = ticks_to_lock(false);
    let soft = ticks_to_lock(true);
    assert!(soft < normal, "soft {} vs normal {}", soft, normal);
}

#[test]
fn pair_lands_on_a_stack() {
    let mut ecs = Coordinator::new();
    tui_puyo::core::components::register_all(&mut ecs).unwrap();
    let s = tui_puyo::core::Session::create(&mut ecs).unwrap();
    place_blob(&mut ecs, s.grid, BlobColor::Red, IPoint::new(0, 15))
        .unwrap()
        .unwrap();

    let pair = spawn_pair(&mut ecs, &mut ColorSource::new(6)).unwrap();
    assert!(!check_lose(&mut ecs, s.grid, pair).unwrap());
    while try_move_pair(&mut ecs, s.grid, pair, DT).unwrap() {}

    assert_eq!(cells(&ecs, pair), (IPoint::new(0, 13), IPoint::new(0, 14)));
}
