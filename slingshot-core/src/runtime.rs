use crate::config::SimulationConfig;
use crate::engine::{Attractor, Body};
use crate::error::ConfigError;
use crate::input::{InputEvent, InputFrame};
use crate::integrator::{step, Flight};
use crate::launch::{launch_body, LaunchParams};
use crate::vector::distance_squared;
use crate::view::SceneView;
use glam::DVec2;

/// Visible rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Edges count as inside. NaN coordinates never do.
    pub fn contains(&self, pos: DVec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

pub fn is_off_bounds(body: &Body, playfield: &Playfield) -> bool {
    !playfield.contains(body.pos)
}

pub fn has_collided(body: &Body, attractor: &Attractor) -> bool {
    distance_squared(body.pos, attractor.position()).sqrt() <= attractor.radius()
}

/// Why a body left the registry. A body matching both predicates
/// counts as collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    OffBounds,
    Collided,
}

/// Whether the driver should keep ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// What happened to the registry during one advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub advanced: usize,
    pub removed_off_bounds: usize,
    pub removed_collided: usize,
}

/// Running totals over the whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub ticks: u64,
    pub launched: u64,
    pub removed_off_bounds: u64,
    pub removed_collided: u64,
}

/// Complete state of one slingshot session, owned by the tick driver
#[derive(Debug, Clone)]
pub struct SimulationState {
    config: SimulationConfig,
    playfield: Playfield,
    attractor: Attractor,
    launch_params: LaunchParams,
    bodies: Vec<Body>,
    pending: Option<DVec2>,
    stats: SimulationStats,
}

impl SimulationState {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            playfield: config.playfield(),
            attractor: config.attractor(),
            launch_params: config.launch_params(),
            bodies: Vec::new(),
            pending: None,
            stats: SimulationStats::default(),
            config,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn attractor(&self) -> &Attractor {
        &self.attractor
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Start point of the drag in progress, if any
    pub fn pending_gesture(&self) -> Option<DVec2> {
        self.pending
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    /// Process one frame: all input events, then physics and removal.
    /// A quit request is honored only after the tick has completed.
    pub fn tick(&mut self, frame: &InputFrame) -> TickOutcome {
        let mut quit = false;
        for event in &frame.events {
            if let InputEvent::Quit = event {
                quit = true;
            } else {
                self.handle_event(*event);
            }
        }

        self.advance();

        if quit {
            TickOutcome::Quit
        } else {
            TickOutcome::Continue
        }
    }

    /// Apply a single pointer event to the gesture state.
    /// Quit carries no state change here; `tick` interprets it.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(pos) => self.pending = Some(pos),
            InputEvent::PointerUp(pos) => {
                if let Some(start) = self.pending.take() {
                    self.launch(start, pos);
                }
            }
            InputEvent::Quit => {}
        }
    }

    /// Launch a body from a completed drag
    pub fn launch(&mut self, start: DVec2, end: DVec2) -> &Body {
        let body = launch_body(start, end, &self.launch_params);
        self.spawn(body)
    }

    /// Insert an already built body into the registry
    pub fn spawn(&mut self, body: Body) -> &Body {
        self.stats.launched += 1;
        self.bodies.push(body);
        &self.bodies[self.bodies.len() - 1]
    }

    /// Drop every live body and any pending gesture
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.pending = None;
    }

    /// Move every body one tick, then drop the ones that left the
    /// playfield or hit the attractor. A body sitting on the attractor's
    /// centre is not integrated; it is removed as collided.
    pub fn advance(&mut self) -> TickReport {
        self.advance_with(|_, _| {})
    }

    /// Like [`advance`](Self::advance), handing each removed body to
    /// `on_removed` before it is dropped
    pub fn advance_with(&mut self, mut on_removed: impl FnMut(&Body, RemovalCause)) -> TickReport {
        let attractor = &self.attractor;
        let flight = Flight::Attracted {
            attractor,
            g: self.config.gravitational_constant,
        };
        let mut swallowed = self
            .bodies
            .iter_mut()
            .map(|body| {
                if body.is_at_singularity(attractor) {
                    true
                } else {
                    step(body, flight);
                    false
                }
            })
            .collect::<Vec<_>>()
            .into_iter();

        let mut report = TickReport {
            advanced: self.bodies.len(),
            ..TickReport::default()
        };
        let playfield = &self.playfield;
        self.bodies.retain(|body| {
            let singular = swallowed.next().unwrap_or(false);
            let cause = if singular || has_collided(body, attractor) {
                RemovalCause::Collided
            } else if is_off_bounds(body, playfield) {
                RemovalCause::OffBounds
            } else {
                return true;
            };
            match cause {
                RemovalCause::Collided => report.removed_collided += 1,
                RemovalCause::OffBounds => report.removed_off_bounds += 1,
            }
            on_removed(body, cause);
            false
        });

        self.stats.ticks += 1;
        self.stats.removed_off_bounds += report.removed_off_bounds as u64;
        self.stats.removed_collided += report.removed_collided as u64;
        report
    }

    /// Read-only snapshot for the renderer
    pub fn view(&self, pointer: DVec2) -> SceneView {
        SceneView::capture(self, pointer)
    }
}

/// How a single launched body's flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFate {
    Removed(RemovalCause),
    /// Still flying when the tick limit was reached
    InFlight,
}

/// Outcome of a headless launch
#[derive(Debug, Clone)]
pub struct LaunchReport {
    pub initial_velocity: DVec2,
    pub fate: BodyFate,
    /// Ticks the body completed, including the one that removed it
    pub ticks: u64,
    pub final_pos: DVec2,
    pub final_vel: DVec2,
    /// Position after every tick, starting with the release point
    pub trajectory: Vec<DVec2>,
}

/// Launch one body from `start` to `end` and follow it for at most `max_ticks`
pub fn run_launch(
    config: SimulationConfig,
    start: DVec2,
    end: DVec2,
    max_ticks: u64,
) -> Result<LaunchReport, ConfigError> {
    let mut state = SimulationState::new(config)?;
    let launched = state.launch(start, end).clone();

    let mut report = LaunchReport {
        initial_velocity: launched.vel,
        fate: BodyFate::InFlight,
        ticks: 0,
        final_pos: launched.pos,
        final_vel: launched.vel,
        trajectory: vec![launched.pos],
    };

    for _ in 0..max_ticks {
        let mut removed = None;
        state.advance_with(|body, cause| removed = Some((body.clone(), cause)));
        report.ticks += 1;

        let (body, fate) = match (removed, state.bodies.first()) {
            (Some((body, cause)), _) => (body, BodyFate::Removed(cause)),
            (None, Some(body)) => (body.clone(), BodyFate::InFlight),
            (None, None) => break,
        };
        report.final_pos = body.pos;
        report.final_vel = body.vel;
        report.trajectory.push(body.pos);
        report.fate = fate;

        if fate != BodyFate::InFlight {
            break;
        }
    }

    Ok(report)
}
