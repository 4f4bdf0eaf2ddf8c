//! End-to-end game state machine tests driven through ticks and input

use tui_puyo::core::systems::place_blob;
use tui_puyo::core::{Game, Phase, Surface};
use tui_puyo::types::{
    BlobColor, FRect, IPoint, IRect, InputSnapshot, Key, GRID_HEIGHT, GRID_SIZE,
};

const DT: f32 = 1.0 / 60.0;

#[derive(Default)]
struct CountingSurface {
    draws: Vec<(u8, IRect, FRect)>,
}

impl Surface for CountingSurface {
    fn draw(&mut self, texture: u8, src: IRect, dst: FRect) {
        self.draws.push((texture, src, dst));
    }
}

fn press(key: Key) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    input.set(key, true);
    input
}

fn run_until_phase(game: &mut Game, phase: Phase, limit: usize) -> usize {
    for i in 0..limit {
        if game.phase() == phase {
            return i;
        }
        game.tick(DT).unwrap();
    }
    panic!("phase {:?} not reached in {} ticks", phase, limit);
}

#[test]
fn same_seed_plays_the_same_game() {
    let mut a = Game::new(99).unwrap();
    let mut b = Game::new(99).unwrap();
    for _ in 0..3000 {
        a.tick(DT).unwrap();
        b.tick(DT).unwrap();
    }
    assert_eq!(a.snapshot().unwrap(), b.snapshot().unwrap());
}

#[test]
fn unattended_column_fills_up_and_the_game_resets() {
    let mut game = Game::new(3).unwrap();
    let mut previous = 0;

    for _ in 0..200_000 {
        game.tick(DT).unwrap();
        let occupied = game.snapshot().unwrap().occupied_count();
        assert!(occupied <= GRID_SIZE);
        // Every pair drops into column 0, so losing empties a nearly full column.
        if previous >= GRID_HEIGHT - 2 && occupied == 0 {
            assert_eq!(game.score(), 0);
            assert_eq!(game.phase(), Phase::Pair);
            return;
        }
        previous = occupied;
    }
    panic!("column 0 never filled up");
}

#[test]
fn no_cell_ever_holds_two_blobs() {
    let mut game = Game::new(21).unwrap();
    for step in 0..20_000 {
        // Wiggle to spread pairs across columns.
        if step % 37 == 0 {
            game.handle_input(&press(Key::Right)).unwrap();
        }
        if step % 53 == 0 {
            game.handle_input(&press(Key::RotateLeft)).unwrap();
        }
        game.tick(DT).unwrap();

        let ecs = game.coordinator();
        let grid = ecs.get::<tui_puyo::core::Grid>(game.session().grid).unwrap();
        let mut seen = std::collections::HashSet::new();
        for (p, e) in grid.occupied() {
            assert!(seen.insert(e), "entity {} in two cells", e);
            let t = ecs.get::<tui_puyo::core::Transform>(e).unwrap();
            assert_eq!(t.grid, p, "transform out of sync for {}", e);
        }
    }
}

#[test]
fn chain_clear_from_a_locked_pair_scores() {
    // Find a seed whose first pair is a single color, then drop it onto a
    // matching pair at the left wall.
    let seed = (0..1000u64)
        .find(|&seed| {
            let mut g = Game::new(seed).unwrap();
            g.tick(DT).unwrap();
            let snap = g.snapshot().unwrap();
            snap.cell(0, 0) == snap.cell(0, 1)
        })
        .expect("no single-color first pair in 1000 seeds");

    let mut probe = Game::new(seed).unwrap();
    probe.tick(DT).unwrap();
    let color = probe.snapshot().unwrap().cell(0, 0).unwrap();

    let mut game = Game::new(seed).unwrap();
    {
        let (ecs, s) = game.world_mut();
        let grid = s.grid;
        for y in [14, 15] {
            place_blob(ecs, grid, color, IPoint::new(0, y))
                .unwrap()
                .unwrap();
        }
    }

    run_until_phase(&mut game, Phase::Falling, 10_000);
    run_until_phase(&mut game, Phase::Score, 10_000);
    game.tick(DT).unwrap();

    assert_eq!(game.score(), 40);
    assert_eq!(game.phase(), Phase::Falling);
    run_until_phase(&mut game, Phase::Pair, 10_000);
    assert_eq!(game.snapshot().unwrap().occupied_count(), 0);
}

#[test]
fn render_draws_every_grid_blob_at_its_cell() {
    let mut game = Game::new(5).unwrap();
    {
        let (ecs, s) = game.world_mut();
        let grid = s.grid;
        place_blob(ecs, grid, BlobColor::Green, IPoint::new(7, 15))
            .unwrap()
            .unwrap();
    }
    game.tick(DT).unwrap();

    let mut surface = CountingSurface::default();
    game.render(&mut surface).unwrap();
    assert_eq!(surface.draws.len(), 3);
    assert!(surface.draws.contains(&(
        0,
        IRect::new(100, 0, 50, 50),
        FRect::new(560.0, 1200.0, 80.0, 80.0)
    )));
    assert!(surface
        .draws
        .iter()
        .any(|(_, _, dst)| *dst == FRect::new(0.0, 0.0, 80.0, 80.0)));
}

#[test]
fn restart_mid_fall_starts_a_fresh_session() {
    let mut game = Game::new(8).unwrap();
    run_until_phase(&mut game, Phase::Falling, 10_000);
    game.handle_input(&press(Key::Restart)).unwrap();

    assert_eq!(game.phase(), Phase::Pair);
    assert_eq!(game.snapshot().unwrap().occupied_count(), 0);
    game.tick(DT).unwrap();
    assert_eq!(game.snapshot().unwrap().occupied_count(), 2);
}
