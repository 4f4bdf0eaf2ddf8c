//! Game state machine - owns the world and decides which systems run

use tracing::{debug, info};

use crate::components::{register_all, Color, Grid, Pair, Score, Transform};
use crate::ecs::{Coordinator, Result};
use crate::rng::ColorSource;
use crate::session::Session;
use crate::snapshot::{GameSnapshot, Phase};
use crate::systems::{
    add_falling_pair, check_lose, clear_chains, clear_falling, destroy_pair, fall_pieces,
    filter_chains, find_combos, handle_pair_input, render_grid, reset, spawn_pair,
    try_move_pair, Surface,
};
use crate::types::{InputSnapshot, Key};

/// Complete game: ECS world, session entities, color source and phase
pub struct Game {
    ecs: Coordinator,
    session: Session,
    colors: ColorSource,
    phase: Phase,
    paused: bool,
}

impl Game {
    /// Create a game whose colors are drawn from `seed`
    pub fn new(seed: u64) -> Result<Self> {
        let mut ecs = Coordinator::new();
        register_all(&mut ecs)?;
        let session = Session::create(&mut ecs)?;
        Ok(Self {
            ecs,
            session,
            colors: ColorSource::new(seed),
            phase: Phase::Pair,
            paused: false,
        })
    }

    pub fn on_start(&mut self) {
        info!(seed = self.colors.seed(), "game started");
    }

    pub fn on_exit(&mut self) {
        info!(score = self.score(), "game exited");
    }

    /// Apply one frame of input. Restart works even while paused.
    pub fn handle_input(&mut self, input: &InputSnapshot) -> Result<()> {
        if input.just_pressed(Key::Restart) {
            info!(score = self.score(), "restart requested");
            return self.reset();
        }
        if input.just_pressed(Key::Pause) {
            self.paused = !self.paused;
            debug!(paused = self.paused, "pause toggled");
        }
        if self.paused || self.phase != Phase::Pair {
            return Ok(());
        }
        if let Some(pair) = self.session.pair {
            handle_pair_input(&mut self.ecs, self.session.grid, pair, input)?;
        }
        Ok(())
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> Result<()> {
        if self.paused {
            return Ok(());
        }
        let s = self.session;

        match self.phase {
            Phase::Pair => match s.pair {
                None => {
                    let pair = spawn_pair(&mut self.ecs, &mut self.colors)?;
                    self.session.pair = Some(pair);
                    if check_lose(&mut self.ecs, s.grid, pair)? {
                        info!(score = self.score(), "game over");
                        self.reset()?;
                    }
                }
                Some(pair) => {
                    if !try_move_pair(&mut self.ecs, s.grid, pair, dt)? {
                        add_falling_pair(&mut self.ecs, s.falling, pair)?;
                        destroy_pair(&mut self.ecs, pair)?;
                        self.session.pair = None;
                        self.phase = Phase::Falling;
                        debug!("pair locked");
                    }
                }
            },
            Phase::Falling => {
                if !fall_pieces(&mut self.ecs, s.grid, s.falling, dt)? {
                    clear_falling(&mut self.ecs, s.falling)?;
                    self.phase = Phase::Score;
                }
            }
            Phase::Score => {
                find_combos(&mut self.ecs, s.grid, s.chains)?;
                if filter_chains(&mut self.ecs, s.chains)? {
                    let points = clear_chains(&mut self.ecs, s.grid, s.falling, s.chains, s.score)?;
                    info!(points, score = self.score(), "chains cleared");
                    self.phase = Phase::Falling;
                } else {
                    self.phase = Phase::Pair;
                }
            }
        }
        Ok(())
    }

    /// Destroy the session contents and start over in the pair phase.
    /// The pause flag is left as it is.
    pub fn reset(&mut self) -> Result<()> {
        reset(&mut self.ecs, &mut self.session)?;
        self.phase = Phase::Pair;
        Ok(())
    }

    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        render_grid(&mut self.ecs, self.session.grid, surface)
    }

    pub fn snapshot(&self) -> Result<GameSnapshot> {
        let mut snap = GameSnapshot {
            score: self.score(),
            paused: self.paused,
            phase: self.phase,
            ..GameSnapshot::default()
        };
        for (p, blob) in self.ecs.get::<Grid>(self.session.grid)?.occupied() {
            snap.cells[p.y as usize][p.x as usize] = Some(self.ecs.get::<Color>(blob)?.0);
        }
        if let Some(pair) = self.session.pair {
            let Pair { center, other } = *self.ecs.get::<Pair>(pair)?;
            snap.pair = Some([
                self.ecs.get::<Transform>(center)?.grid,
                self.ecs.get::<Transform>(other)?.grid,
            ]);
        }
        Ok(snap)
    }

    pub fn score(&self) -> u32 {
        self.ecs
            .get::<Score>(self.session.score)
            .map_or(0, |score| score.0)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.ecs
    }

    /// Mutable world access for tests and tools that set up boards directly
    pub fn world_mut(&mut self) -> (&mut Coordinator, &Session) {
        (&mut self.ecs, &self.session)
    }
}
