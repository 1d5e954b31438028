//! Interactive window for the slingshot simulation
//!
//! The app is the session's tick driver: it gathers pointer input from
//! egui, feeds it to the simulation at the configured tick rate and paints
//! the resulting scene. An optional file watcher reloads the configuration
//! whenever it changes on disk.

use crate::canvas::Canvas;
use eframe::egui;
use notify::{Event, RecommendedWatcher, Watcher};
use slingshot_core::{
    DVec2, InputEvent, InputFrame, SceneView, SimulationConfig, SimulationState, TickOutcome,
};
use std::mem;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(8, 10, 24);
const ATTRACTOR_FILL: egui::Color32 = egui::Color32::from_rgb(201, 144, 96);
const ATTRACTOR_RIM: egui::Color32 = egui::Color32::from_rgb(232, 196, 150);
const BODY_COLOR: egui::Color32 = egui::Color32::RED;
const GUIDE_COLOR: egui::Color32 = egui::Color32::WHITE;

/// Radius of the marker drawn under the pointer while dragging
const MARKER_RADIUS: f64 = 5.0;
const GUIDE_WIDTH: f32 = 2.0;

/// Cap on catch-up ticks after a stalled frame
const MAX_TICKS_PER_FRAME: u32 = 4;

/// Slingshot window application
pub struct SlingApp {
    config_path: Option<PathBuf>,
    state: SimulationState,
    last_load_error: Option<String>,
    paused: bool,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
    needs_reload: bool,
    tick_period: Duration,
    last_tick: Instant,
    pointer: DVec2,
    queued_events: Vec<InputEvent>,
    finished: bool,
}

impl SlingApp {
    pub fn new(
        state: SimulationState,
        config_path: Option<PathBuf>,
        watch: bool,
        _cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut watcher = None;

        if let (true, Some(path)) = (watch, config_path.as_ref()) {
            match notify::recommended_watcher(move |res| {
                let _ = tx.send(res);
            }) {
                Ok(mut w) => match w.watch(path, notify::RecursiveMode::NonRecursive) {
                    Ok(()) => watcher = Some(w),
                    Err(e) => eprintln!("Not watching {}: {}", path.display(), e),
                },
                Err(e) => eprintln!("File watcher unavailable: {}", e),
            }
        }

        Self {
            config_path,
            tick_period: Duration::from_secs_f64(state.config().tick_period()),
            state,
            last_load_error: None,
            paused: false,
            file_watcher: watcher,
            file_receiver: rx,
            needs_reload: false,
            last_tick: Instant::now(),
            pointer: DVec2::ZERO,
            queued_events: Vec::new(),
            finished: false,
        }
    }

    fn reload_config(&mut self) {
        let Some(path) = self.config_path.as_ref() else {
            return;
        };
        match SimulationConfig::load(path).and_then(SimulationState::new) {
            Ok(state) => {
                self.tick_period = Duration::from_secs_f64(state.config().tick_period());
                self.state = state;
                self.queued_events.clear();
                self.last_tick = Instant::now();
                self.last_load_error = None;
            }
            Err(e) => {
                // Keep running the previous session
                eprintln!("Config reload rejected: {}", e);
                self.last_load_error = Some(e.to_string());
            }
        }
    }

    fn check_file_changes(&mut self) {
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_) | notify::EventKind::Create(_),
                    paths,
                    ..
                }) => {
                    if let Some(path) = &self.config_path {
                        if paths.iter().any(|p| p.ends_with(path) || path.ends_with(p)) {
                            self.needs_reload = true;
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("File watcher error: {}", e);
                }
            }
        }

        if self.needs_reload {
            self.reload_config();
            self.needs_reload = false;
        }
    }

    /// Translate this frame's egui input into simulation events
    fn collect_input(&mut self, ctx: &egui::Context, canvas: &Canvas) -> bool {
        ctx.input(|i| {
            if let Some(pos) = i.pointer.latest_pos() {
                self.pointer = canvas.to_world(pos);
            }

            for event in &i.events {
                if let egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } = event
                {
                    let world = canvas.to_world(*pos);
                    if *pressed {
                        // Presses on the control bar are not gestures
                        if canvas.rect.contains(*pos) {
                            self.queued_events.push(InputEvent::PointerDown(world));
                        }
                    } else {
                        self.queued_events.push(InputEvent::PointerUp(world));
                    }
                }
            }

            i.viewport().close_requested()
        })
    }

    fn run_tick(&mut self, quit: bool) -> TickOutcome {
        let mut frame = InputFrame::new(self.pointer);
        frame.events = mem::take(&mut self.queued_events);
        if quit {
            frame.events.push(InputEvent::Quit);
        }

        if self.paused {
            for event in &frame.events {
                self.state.handle_event(*event);
            }
            return if quit {
                TickOutcome::Quit
            } else {
                TickOutcome::Continue
            };
        }
        self.state.tick(&frame)
    }

    /// Run as many ticks as the clock owes, or exactly one final tick on quit
    fn drive_ticks(&mut self, quit: bool) -> TickOutcome {
        if quit {
            return self.run_tick(true);
        }

        let mut ran = 0;
        while self.last_tick.elapsed() >= self.tick_period {
            self.last_tick += self.tick_period;
            self.run_tick(false);
            ran += 1;
            if ran == MAX_TICKS_PER_FRAME {
                self.last_tick = Instant::now();
                break;
            }
        }
        TickOutcome::Continue
    }

    fn paint(&self, painter: &egui::Painter, canvas: &Canvas, view: &SceneView) {
        painter.rect_filled(canvas.rect, 0.0, BACKGROUND);

        let attractor = canvas.to_screen(view.attractor.position);
        let radius = canvas.length(view.attractor.radius);
        painter.circle_filled(attractor, radius, ATTRACTOR_FILL);
        painter.circle_stroke(attractor, radius, egui::Stroke::new(1.5, ATTRACTOR_RIM));

        for body in &view.bodies {
            let points = body.outline.iter().map(|p| canvas.to_screen(*p)).collect();
            painter.add(egui::Shape::closed_line(
                points,
                egui::Stroke::new(1.0, BODY_COLOR),
            ));
        }

        if let Some(guide) = view.drag_guide {
            let current = canvas.to_screen(guide.current);
            painter.line_segment(
                [canvas.to_screen(guide.start), current],
                egui::Stroke::new(GUIDE_WIDTH, GUIDE_COLOR),
            );
            painter.circle_filled(current, canvas.length(MARKER_RADIUS), BODY_COLOR);
        }
    }
}

impl eframe::App for SlingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        // Top bar with controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.paused { "▶ Resume" } else { "⏸ Pause" }).clicked() {
                    self.paused = !self.paused;
                    self.last_tick = Instant::now();
                }

                if ui.button("✖ Clear").clicked() {
                    self.state.clear();
                }

                ui.separator();

                let stats = self.state.stats();
                ui.label(format!("Bodies: {}", self.state.bodies().len()));
                ui.label(format!("Launched: {}", stats.launched));
                ui.label(format!("Escaped: {}", stats.removed_off_bounds));
                ui.label(format!("Crashed: {}", stats.removed_collided));

                if let Some(ref error) = self.last_load_error {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("Config error: {}", error))
                            .color(egui::Color32::RED),
                    );
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let canvas = Canvas::fit(ui.max_rect(), self.state.playfield());

                let quit = self.collect_input(ctx, &canvas);
                if self.drive_ticks(quit) == TickOutcome::Quit && !self.finished {
                    self.finished = true;
                    let stats = self.state.stats();
                    eprintln!(
                        "Session ended after {} ticks: {} launched, {} escaped, {} crashed, {} still in flight",
                        stats.ticks,
                        stats.launched,
                        stats.removed_off_bounds,
                        stats.removed_collided,
                        self.state.bodies().len()
                    );
                }

                let view = self.state.view(self.pointer);
                self.paint(ui.painter(), &canvas, &view);
            });

        let until_next = self.tick_period.saturating_sub(self.last_tick.elapsed());
        ctx.request_repaint_after(until_next);
    }
}
