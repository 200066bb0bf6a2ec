//! Game session state machine
//!
//! Idle -> Running -> Ended, with restart going back to Running. The session
//! owns the simulation state, the two periodic activities and the best score.
//! Nothing here returns an error: storage trouble is logged and the game goes on.

use std::collections::VecDeque;

use super::physics;
use super::schedule::Schedule;
use super::scoring;
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{TickReport, tick};
use crate::best_score::BestScore;
use crate::input::InputEvent;
use crate::persistence::PersistRequest;
use crate::snapshot::RenderSnapshot;
use crate::tuning::Tuning;

/// Events kept for a host that never drains them. Oldest are dropped first.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Short status line shown by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Started,
    Flap,
    GameOver,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ready => "Ready to play",
            Status::Started => "Game started",
            Status::Flap => "Flap!",
            Status::GameOver => "Game over",
        }
    }
}

/// One game session
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    state: GameState,
    schedule: Schedule,
    best: BestScore,
    status: Status,
    events: VecDeque<GameEvent>,
    outbox: Vec<PersistRequest>,
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        let state = GameState::new(&tuning);
        Self {
            tuning,
            state,
            schedule: Schedule::default(),
            best: BestScore::default(),
            status: Status::Ready,
            events: VecDeque::new(),
            outbox: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.best.value
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts that stage scenarios (replays, tests)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// True while the tick driver and spawn timer are live
    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_active()
    }

    /// Dispatch an input event. Events that make no sense in the current
    /// phase are dropped. Returns whether the event was acted on.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match (event, self.state.phase) {
            (InputEvent::Jump, GamePhase::Running) => {
                self.jump();
                true
            }
            (InputEvent::Start | InputEvent::Restart, GamePhase::Idle | GamePhase::Ended) => {
                self.start();
                true
            }
            (event, phase) => {
                log::debug!("Ignoring {:?} while {:?}", event, phase);
                false
            }
        }
    }

    /// Begin a fresh run: reset bird, course and score, start both timers.
    /// Undrained events from the previous run are discarded.
    pub fn start(&mut self) {
        self.state.reset(&self.tuning);
        self.state.phase = GamePhase::Running;
        self.schedule.start(self.tuning.spawn_interval_ms);
        self.status = Status::Started;
        self.events.clear();
        self.push_event(GameEvent::Started);
        log::info!("Game started (best {})", self.best.value);
    }

    /// Same as [`Session::start`]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Flap. Ignored unless running.
    pub fn jump(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        physics::jump(&mut self.state.bird, &self.tuning);
        self.status = Status::Flap;
        self.push_event(GameEvent::Flapped);
    }

    /// Host frame callback. Spawns an obstacle if one is due, then runs one
    /// tick. Returns whether the host should keep calling (false once not
    /// running).
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let Some(spawn_due) = self.schedule.frame(now_ms) else {
            return false;
        };
        if spawn_due {
            self.spawn_obstacle();
        }
        self.tick();
        self.state.phase == GamePhase::Running
    }

    /// Run one simulation tick; a no-op unless running
    pub fn tick(&mut self) -> Option<TickReport> {
        let report = tick(&mut self.state, &self.tuning)?;

        let before = self.state.score - report.scored.len() as u32;
        for n in 1..=report.scored.len() as u32 {
            self.push_event(GameEvent::Scored { score: before + n });
        }
        if !report.scored.is_empty() {
            log::debug!("Passed {:?}, score {}", report.scored, self.state.score);
        }

        if let Some(collision) = report.collision {
            log::info!("Crashed into {:?}", collision);
            self.end();
        }

        Some(report)
    }

    /// Spawn timer body. Does nothing unless running.
    pub fn spawn_obstacle(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        let id = self.state.course.spawn(&self.tuning).id;
        self.push_event(GameEvent::ObstacleSpawned { id });
    }

    fn end(&mut self) {
        self.state.phase = GamePhase::Ended;
        self.schedule.cancel();
        self.status = Status::GameOver;

        let score = self.state.score;
        self.push_event(GameEvent::Crashed { score });

        if let Some(best) = scoring::finalize(score, &mut self.best.value) {
            self.push_event(GameEvent::NewBest { best });
            self.outbox.push(self.best.save_request());
        }
        log::info!("Game over: score {}, best {}", score, self.best.value);
    }

    /// Apply a best score that finished loading. Only ever raises the value,
    /// so a late load cannot clobber a score set during play.
    pub fn apply_loaded_best(&mut self, loaded: u32) {
        if !self.best.merge(loaded) {
            log::debug!("Loaded best {} not above current {}", loaded, self.best.value);
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Drain events produced since the last call, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Drain pending storage writes
    pub fn take_persist_requests(&mut self) -> Vec<PersistRequest> {
        std::mem::take(&mut self.outbox)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, &self.tuning, self.best.value, self.status)
    }
}
