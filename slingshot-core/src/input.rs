use glam::DVec2;

/// Discrete input event delivered by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerDown(DVec2),
    PointerUp(DVec2),
}

/// Everything the input layer reports for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
    /// Current pointer position in world coordinates
    pub pointer: DVec2,
}

impl InputFrame {
    pub fn new(pointer: DVec2) -> Self {
        Self {
            events: Vec::new(),
            pointer,
        }
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }
}
