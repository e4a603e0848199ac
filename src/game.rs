use std::io;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::{GameConfig, INITIAL_WORM_LENGTH};
use crate::error::Result;
use crate::food::spawn_food;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, GameInput, direction_change_is_valid};
use crate::timer::TickTimer;
use crate::worm::Worm;

/// Lifecycle phase of one round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// What ended the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// The worm covers every cell, so no food can be placed.
    BoardFilled,
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The round was not running; nothing moved.
    Skipped,
    /// The worm moved without eating.
    Moved,
    /// The worm ate and grew by one segment.
    Ate,
    Died(DeathReason),
}

/// Complete mutable state of one round.
#[derive(Debug, Clone)]
pub struct GameState {
    pub worm: Worm,
    /// Direction applied on the most recent tick.
    pub direction: Direction,
    /// Direction that the next tick will commit.
    pub pending_direction: Direction,
    pub food: Cell,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub phase: Phase,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
}

impl GameState {
    /// Builds the initial round: a three-segment worm at the board centre
    /// heading right, and food on a free cell.
    #[must_use]
    pub fn fresh(config: &GameConfig, grid: Grid, rng: &mut StdRng) -> Self {
        let worm = Worm::straight(grid.center(), Direction::Right, INITIAL_WORM_LENGTH);
        let food = spawn_food(rng, grid, &worm);

        Self {
            worm,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food,
            score: 0,
            tick_interval_ms: config.initial_tick_interval_ms,
            phase: Phase::Idle,
            death_reason: None,
            tick_count: 0,
        }
    }
}

/// Read-only view of the state handed to the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub worm: &'a Worm,
    pub direction: Direction,
    pub food: Cell,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub phase: Phase,
    pub death_reason: Option<DeathReason>,
}

impl<'a> Snapshot<'a> {
    #[must_use]
    pub fn of(state: &'a GameState, grid: Grid) -> Self {
        Self {
            grid,
            worm: &state.worm,
            direction: state.direction,
            food: state.food,
            score: state.score,
            tick_interval_ms: state.tick_interval_ms,
            phase: state.phase,
            death_reason: state.death_reason,
        }
    }
}

/// Display side of the game, driven by the engine.
pub trait Presenter {
    /// Draws the current state.
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;

    /// Announces the end of a round with its final score.
    fn show_game_over(&mut self, score: u32) -> io::Result<()>;

    fn update_score_display(&mut self, score: u32, high_score: u32) -> io::Result<()>;
}

/// Storage for the single best score, kept across rounds and runs.
pub trait HighScoreStore {
    /// Returns the stored best score, or 0 when none is available.
    fn load_high_score(&self) -> u32;

    fn save_high_score(&mut self, score: u32) -> io::Result<()>;
}

/// Tick engine: sole owner and mutator of the game state.
///
/// The host calls [`Engine::on_timer`] when [`Engine::next_deadline`] passes
/// and forwards input through [`Engine::handle_input`].
#[derive(Debug)]
pub struct Engine<P, S> {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    high_score: u32,
    timer: Option<TickTimer>,
    timers_scheduled: u64,
    rng: StdRng,
    presenter: P,
    store: S,
}

impl<P: Presenter, S: HighScoreStore> Engine<P, S> {
    /// Creates an idle engine, reading the best score from `store`.
    pub fn new(config: GameConfig, mut rng: StdRng, presenter: P, store: S) -> Result<Self> {
        config.validate()?;

        let grid = Grid::new(config.grid_extent);
        let state = GameState::fresh(&config, grid, &mut rng);
        let high_score = store.load_high_score();

        Ok(Self {
            config,
            grid,
            state,
            high_score,
            timer: None,
            timers_scheduled: 0,
            rng,
            presenter,
            store,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scripted setups such as replays and tests.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// The live tick schedule, if the round is running or paused.
    #[must_use]
    pub fn timer(&self) -> Option<&TickTimer> {
        self.timer.as_ref()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(&self.state, self.grid)
    }

    /// When the next tick is due, or `None` while no timer is armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(TickTimer::deadline)
    }

    /// Pushes score and a fresh frame to the presenter.
    pub fn present(&mut self) -> Result<()> {
        self.presenter
            .update_score_display(self.state.score, self.high_score)?;
        self.redraw()
    }

    pub fn redraw(&mut self) -> Result<()> {
        self.presenter.render(&Snapshot::of(&self.state, self.grid))?;
        Ok(())
    }

    /// Resets the round and starts ticking.
    pub fn start(&mut self, now: Instant) -> Result<()> {
        self.cancel_timer();
        self.state = GameState::fresh(&self.config, self.grid, &mut self.rng);
        self.state.phase = Phase::Running;
        self.schedule_timer(now);

        info!(
            grid_extent = self.grid.extent(),
            tick_interval_ms = self.state.tick_interval_ms,
            "round started"
        );

        self.present()
    }

    pub fn restart(&mut self, now: Instant) -> Result<()> {
        self.start(now)
    }

    /// Flips between running and paused. Returns false in any other phase.
    ///
    /// The timer keeps firing while paused; those ticks are skipped.
    pub fn toggle_pause(&mut self) -> Result<bool> {
        self.state.phase = match self.state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Idle | Phase::GameOver => return Ok(false),
        };

        debug!(phase = ?self.state.phase, "pause toggled");
        self.redraw()?;
        Ok(true)
    }

    /// Queues `direction` for the next tick if it turns off the committed axis.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.state.direction, direction) {
            return false;
        }

        self.state.pending_direction = direction;
        true
    }

    /// Applies one input event. `Quit` is left to the host.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Result<()> {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.request_direction(direction);
            }
            GameInput::PauseToggle => {
                let _ = self.toggle_pause()?;
            }
            GameInput::Start => {
                if matches!(self.state.phase, Phase::Idle | Phase::GameOver) {
                    self.start(now)?;
                }
            }
            GameInput::Restart => self.restart(now)?,
            GameInput::Redraw => self.present()?,
            GameInput::Quit => {}
        }

        Ok(())
    }

    /// Runs a tick if the timer is due. Returns `None` when nothing fired.
    pub fn on_timer(&mut self, now: Instant) -> Result<Option<TickOutcome>> {
        let Some(timer) = self.timer.as_mut() else {
            return Ok(None);
        };

        if !timer.fire(now) {
            return Ok(None);
        }

        self.tick(now).map(Some)
    }

    /// Advances the round by one step.
    ///
    /// Collision checks run against the body before the tail moves, so
    /// steering into the cell the tail is about to vacate is fatal.
    pub fn tick(&mut self, now: Instant) -> Result<TickOutcome> {
        if self.state.phase != Phase::Running {
            return Ok(TickOutcome::Skipped);
        }

        self.state.tick_count += 1;
        self.state.direction = self.state.pending_direction;
        let new_head = self.state.worm.advance(self.state.direction);

        if !self.grid.in_bounds(new_head) {
            return self.game_over(DeathReason::WallCollision);
        }

        if self.state.worm.occupies(new_head) {
            return self.game_over(DeathReason::SelfCollision);
        }

        self.state.worm.grow_head(new_head);

        let outcome = if new_head == self.state.food {
            if !self.eat(now)? {
                return self.game_over(DeathReason::BoardFilled);
            }
            TickOutcome::Ate
        } else {
            self.state.worm.drop_tail();
            TickOutcome::Moved
        };

        self.redraw()?;
        Ok(outcome)
    }

    /// Scores the food and places the next one. Returns false when the worm
    /// fills the board and there is nowhere left to place it.
    fn eat(&mut self, now: Instant) -> Result<bool> {
        self.state.score += self.config.food_reward;

        if self.state.score > self.high_score {
            self.high_score = self.state.score;
            if let Err(error) = self.store.save_high_score(self.high_score) {
                warn!(%error, high_score = self.high_score, "failed to save high score");
            }
        }

        self.presenter
            .update_score_display(self.state.score, self.high_score)?;

        if self.state.worm.len() >= self.grid.total_cells() {
            return Ok(false);
        }

        self.state.food = spawn_food(&mut self.rng, self.grid, &self.state.worm);

        if self.state.tick_interval_ms > self.config.min_tick_interval_ms {
            self.state.tick_interval_ms = self
                .state
                .tick_interval_ms
                .saturating_sub(self.config.tick_interval_step_ms)
                .max(self.config.min_tick_interval_ms);
            self.schedule_timer(now);
        }

        Ok(true)
    }

    fn game_over(&mut self, reason: DeathReason) -> Result<TickOutcome> {
        self.state.phase = Phase::GameOver;
        self.state.death_reason = Some(reason);
        self.cancel_timer();

        info!(
            score = self.state.score,
            high_score = self.high_score,
            ?reason,
            "game over"
        );

        self.presenter.show_game_over(self.state.score)?;
        self.redraw()?;
        Ok(TickOutcome::Died(reason))
    }

    fn schedule_timer(&mut self, now: Instant) {
        self.cancel_timer();
        self.timers_scheduled += 1;

        let interval = Duration::from_millis(self.state.tick_interval_ms);
        let timer = TickTimer::schedule(self.timers_scheduled, now, interval);
        debug!(
            timer_id = timer.id(),
            interval_ms = self.state.tick_interval_ms,
            "tick timer armed"
        );
        self.timer = Some(timer);
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!(timer_id = timer.id(), "tick timer cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::time::{Duration, Instant};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{
        DeathReason, Engine, HighScoreStore, Phase, Presenter, Snapshot, TickOutcome,
    };
    use crate::config::GameConfig;
    use crate::grid::Cell;
    use crate::input::{Direction, GameInput};
    use crate::worm::Worm;

    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    enum Shown {
        Frame(Phase),
        GameOver(u32),
        Score(u32, u32),
    }

    #[derive(Debug, Default)]
    struct RecordingPresenter {
        shown: Vec<Shown>,
    }

    impl Presenter for RecordingPresenter {
        fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
            self.shown.push(Shown::Frame(snapshot.phase));
            Ok(())
        }

        fn show_game_over(&mut self, score: u32) -> io::Result<()> {
            self.shown.push(Shown::GameOver(score));
            Ok(())
        }

        fn update_score_display(&mut self, score: u32, high_score: u32) -> io::Result<()> {
            self.shown.push(Shown::Score(score, high_score));
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MemoryStore {
        high_score: u32,
        saves: Vec<u32>,
        fail_saves: bool,
    }

    impl HighScoreStore for MemoryStore {
        fn load_high_score(&self) -> u32 {
            self.high_score
        }

        fn save_high_score(&mut self, score: u32) -> io::Result<()> {
            if self.fail_saves {
                return Err(io::Error::other("disk full"));
            }
            self.high_score = score;
            self.saves.push(score);
            Ok(())
        }
    }

    type TestEngine = Engine<RecordingPresenter, MemoryStore>;

    fn engine_with_store(store: MemoryStore) -> TestEngine {
        Engine::new(
            GameConfig::default(),
            StdRng::seed_from_u64(5),
            RecordingPresenter::default(),
            store,
        )
        .expect("default config should be valid")
    }

    fn running_engine(now: Instant) -> TestEngine {
        let mut engine = engine_with_store(MemoryStore::default());
        engine.start(now).expect("start should succeed");
        engine
    }

    fn set_worm(engine: &mut TestEngine, segments: Vec<Cell>, direction: Direction) {
        let state = engine.state_mut();
        state.worm = Worm::from_segments(segments);
        state.direction = direction;
        state.pending_direction = direction;
    }

    #[test]
    fn new_engine_is_idle_with_loaded_high_score() {
        let engine = engine_with_store(MemoryStore {
            high_score: 70,
            ..MemoryStore::default()
        });

        assert_eq!(engine.state().phase, Phase::Idle);
        assert_eq!(engine.high_score(), 70);
        assert!(engine.timer().is_none());
    }

    #[test]
    fn start_resets_to_initial_configuration() {
        let now = Instant::now();
        let engine = running_engine(now);
        let state = engine.state();

        let segments: Vec<Cell> = state.worm.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]
        );
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_interval_ms, 150);
        assert_eq!(state.phase, Phase::Running);
        assert!(!state.worm.occupies(state.food));
        assert_eq!(
            engine.next_deadline(),
            Some(now + Duration::from_millis(150))
        );
    }

    #[test]
    fn eating_food_grows_scores_and_speeds_up() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        engine.state_mut().food = Cell::new(11, 10);
        let first_timer = engine.timer().map(|timer| timer.id());

        let outcome = engine.tick(now).expect("tick should succeed");

        let state = engine.state();
        assert_eq!(outcome, TickOutcome::Ate);
        let segments: Vec<Cell> = state.worm.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Cell::new(11, 10),
                Cell::new(10, 10),
                Cell::new(9, 10),
                Cell::new(8, 10)
            ]
        );
        assert_eq!(state.score, 10);
        assert_eq!(state.tick_interval_ms, 145);
        assert!(engine.grid().in_bounds(state.food));
        assert!(!state.worm.occupies(state.food));

        let timer = engine.timer().expect("timer should stay armed");
        assert_ne!(Some(timer.id()), first_timer);
        assert_eq!(timer.interval(), Duration::from_millis(145));
    }

    #[test]
    fn moving_without_food_keeps_length() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        engine.state_mut().food = Cell::new(0, 0);

        let outcome = engine.tick(now).expect("tick should succeed");

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(engine.state().worm.len(), 3);
        assert_eq!(engine.state().worm.head(), Cell::new(11, 10));
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn wall_collision_ends_round_and_cancels_timer() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        set_worm(
            &mut engine,
            vec![Cell::new(0, 10), Cell::new(1, 10), Cell::new(2, 10)],
            Direction::Left,
        );
        engine.state_mut().score = 30;

        let outcome = engine.tick(now).expect("tick should succeed");

        assert_eq!(outcome, TickOutcome::Died(DeathReason::WallCollision));
        assert_eq!(engine.state().phase, Phase::GameOver);
        assert!(engine.timer().is_none());
        assert!(engine.presenter().shown.contains(&Shown::GameOver(30)));
        assert_eq!(engine.state().worm.head(), Cell::new(0, 10));
    }

    #[test]
    fn moving_into_the_tail_cell_is_a_collision() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        set_worm(
            &mut engine,
            vec![
                Cell::new(5, 5),
                Cell::new(5, 4),
                Cell::new(4, 4),
                Cell::new(4, 5),
            ],
            Direction::Down,
        );
        engine.state_mut().food = Cell::new(15, 15);
        assert!(engine.request_direction(Direction::Left));

        let outcome = engine.tick(now).expect("tick should succeed");

        assert_eq!(outcome, TickOutcome::Died(DeathReason::SelfCollision));
        assert_eq!(engine.state().worm.len(), 4);
    }

    #[test]
    fn eating_the_last_free_cell_ends_the_round() {
        let now = Instant::now();
        let mut engine = Engine::new(
            GameConfig::with_grid_extent(4),
            StdRng::seed_from_u64(5),
            RecordingPresenter::default(),
            MemoryStore::default(),
        )
        .expect("4x4 config should be valid");
        engine.start(now).expect("start should succeed");

        // Serpentine through every cell except (0, 0), head at (0, 1) heading up.
        let mut segments = vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 3)];
        segments.extend((1..4).map(|x| Cell::new(x, 3)));
        segments.extend((1..4).rev().map(|x| Cell::new(x, 2)));
        segments.extend((1..4).map(|x| Cell::new(x, 1)));
        segments.extend((1..4).rev().map(|x| Cell::new(x, 0)));
        assert_eq!(segments.len(), 15);
        set_worm(&mut engine, segments, Direction::Up);
        engine.state_mut().food = Cell::new(0, 0);

        let outcome = engine.tick(now).expect("tick should return");

        assert_eq!(outcome, TickOutcome::Died(DeathReason::BoardFilled));
        assert_eq!(engine.state().phase, Phase::GameOver);
        assert_eq!(engine.state().worm.len(), 16);
        assert_eq!(engine.state().score, 10);
        assert_eq!(engine.high_score(), 10);
        assert!(engine.timer().is_none());
        assert!(engine.presenter().shown.contains(&Shown::GameOver(10)));
    }

    #[test]
    fn reversal_is_rejected_and_turns_are_accepted() {
        let mut engine = running_engine(Instant::now());

        assert!(!engine.request_direction(Direction::Left));
        assert_eq!(engine.state().pending_direction, Direction::Right);

        assert!(engine.request_direction(Direction::Up));
        assert_eq!(engine.state().pending_direction, Direction::Up);

        assert!(engine.request_direction(Direction::Down));
        assert_eq!(engine.state().pending_direction, Direction::Down);
    }

    #[test]
    fn pending_turn_does_not_unlock_reversal_before_tick() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        engine.state_mut().food = Cell::new(0, 0);

        assert!(engine.request_direction(Direction::Up));
        assert!(!engine.request_direction(Direction::Left));

        engine.tick(now).expect("tick should succeed");
        assert_eq!(engine.state().worm.head(), Cell::new(10, 9));
        assert!(engine.request_direction(Direction::Left));
    }

    #[test]
    fn tick_interval_stops_at_floor() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        engine.state_mut().tick_interval_ms = 55;
        engine.state_mut().food = Cell::new(11, 10);

        engine.tick(now).expect("tick should succeed");
        assert_eq!(engine.state().tick_interval_ms, 50);
        let floor_timer = engine.timer().map(|timer| timer.id());

        let next_food = engine.state().worm.advance(Direction::Right);
        engine.state_mut().food = next_food;
        engine.tick(now).expect("tick should succeed");

        assert_eq!(engine.state().score, 20);
        assert_eq!(engine.state().tick_interval_ms, 50);
        assert_eq!(engine.timer().map(|timer| timer.id()), floor_timer);
    }

    #[test]
    fn paused_ticks_are_skipped_but_timer_stays_armed() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        let head = engine.state().worm.head();

        assert!(engine.toggle_pause().expect("pause should succeed"));
        assert_eq!(engine.state().phase, Phase::Paused);

        let fired = engine
            .on_timer(now + Duration::from_millis(150))
            .expect("timer should not fail");

        assert_eq!(fired, Some(TickOutcome::Skipped));
        assert_eq!(engine.state().worm.head(), head);
        assert_eq!(
            engine.next_deadline(),
            Some(now + Duration::from_millis(300))
        );

        assert!(engine.toggle_pause().expect("resume should succeed"));
        assert_eq!(engine.state().phase, Phase::Running);
    }

    #[test]
    fn pause_is_ignored_outside_a_round() {
        let mut engine = engine_with_store(MemoryStore::default());

        assert!(!engine.toggle_pause().expect("toggle should not fail"));
        assert_eq!(engine.state().phase, Phase::Idle);
    }

    #[test]
    fn timer_does_not_fire_early() {
        let now = Instant::now();
        let mut engine = running_engine(now);

        let fired = engine
            .on_timer(now + Duration::from_millis(100))
            .expect("timer should not fail");

        assert_eq!(fired, None);
        assert_eq!(engine.state().tick_count, 0);
    }

    #[test]
    fn high_score_is_saved_only_when_exceeded() {
        let now = Instant::now();
        let mut engine = engine_with_store(MemoryStore {
            high_score: 10,
            ..MemoryStore::default()
        });
        engine.start(now).expect("start should succeed");

        engine.state_mut().food = Cell::new(11, 10);
        engine.tick(now).expect("tick should succeed");
        assert_eq!(engine.high_score(), 10);
        assert!(engine.store().saves.is_empty());

        engine.state_mut().food = Cell::new(12, 10);
        engine.tick(now).expect("tick should succeed");
        assert_eq!(engine.high_score(), 20);
        assert_eq!(engine.store().saves, vec![20]);
    }

    #[test]
    fn failed_save_does_not_interrupt_play() {
        let now = Instant::now();
        let mut engine = engine_with_store(MemoryStore {
            fail_saves: true,
            ..MemoryStore::default()
        });
        engine.start(now).expect("start should succeed");
        engine.state_mut().food = Cell::new(11, 10);

        let outcome = engine.tick(now).expect("tick should succeed");

        assert_eq!(outcome, TickOutcome::Ate);
        assert_eq!(engine.high_score(), 10);
        assert_eq!(engine.state().phase, Phase::Running);
    }

    #[test]
    fn restart_after_game_over_arms_a_new_timer() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        let first_timer = engine.timer().map(|timer| timer.id());
        set_worm(&mut engine, vec![Cell::new(19, 3)], Direction::Right);
        engine.tick(now).expect("tick should succeed");
        assert_eq!(engine.state().phase, Phase::GameOver);

        engine
            .handle_input(GameInput::Start, now)
            .expect("start should succeed");

        assert_eq!(engine.state().phase, Phase::Running);
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().death_reason, None);
        let timer = engine.timer().expect("restart should arm a timer");
        assert!(Some(timer.id()) > first_timer);
    }

    #[test]
    fn start_input_does_not_reset_a_running_round() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        engine.state_mut().score = 40;

        engine
            .handle_input(GameInput::Start, now)
            .expect("input should succeed");
        assert_eq!(engine.state().score, 40);

        engine
            .handle_input(GameInput::Restart, now)
            .expect("input should succeed");
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn worm_length_changes_only_when_eating() {
        let now = Instant::now();
        let mut engine = running_engine(now);
        let mut rng = StdRng::seed_from_u64(99);
        let directions = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        for _ in 0..500 {
            if engine.state().phase != Phase::Running {
                engine.start(now).expect("start should succeed");
            }

            let before = engine.state().worm.len();
            let _ = engine.request_direction(directions[rng.gen_range(0..4)]);
            match engine.tick(now).expect("tick should succeed") {
                TickOutcome::Ate => assert_eq!(engine.state().worm.len(), before + 1),
                TickOutcome::Moved => assert_eq!(engine.state().worm.len(), before),
                TickOutcome::Died(_) => assert_eq!(engine.state().worm.len(), before),
                TickOutcome::Skipped => unreachable!("round is running"),
            }
        }
    }
}
