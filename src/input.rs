//! Raw host input to abstract commands
//!
//! The host forwards pointer, touch and key events; this module decides what
//! they mean for the current screen. Button hit-testing (mute, links) stays
//! with the host, which should only forward clicks that missed its buttons.

use crate::session::Command;
use crate::sim::Side;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    Enter,
    Space,
    Escape,
    M,
    F1,
    F2,
    Other,
}

/// A raw event from the host window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// Mouse click in window pixels
    PointerDown { x: f32, y: f32 },
    /// Finger down, coordinates normalized to the window
    TouchDown { x_norm: f32, y_norm: f32 },
    KeyDown(Key),
}

/// Requests only the host can carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Quit,
    ToggleMute,
    ToggleDebug,
}

/// What a raw event turned into
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Command(Command),
    Host(HostAction),
}

/// Stateful translator; remembers the debug toggles between events
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    pub debug_mode: bool,
    infinite_lives: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Infinite lives only apply while debug mode is on
    pub fn infinite_lives_active(&self) -> bool {
        self.debug_mode && self.infinite_lives
    }

    /// Translate one event. `playing` is whether a round is in progress.
    pub fn translate(&mut self, input: RawInput, playing: bool) -> Vec<Intent> {
        match input {
            RawInput::PointerDown { .. } | RawInput::TouchDown { .. } => {
                if playing {
                    vec![Intent::Command(Command::ToggleGoalieSide)]
                } else {
                    vec![Intent::Command(Command::StartRound)]
                }
            }
            RawInput::KeyDown(key) => self.translate_key(key, playing),
        }
    }

    fn translate_key(&mut self, key: Key, playing: bool) -> Vec<Intent> {
        match key {
            Key::Left | Key::A if playing => {
                vec![Intent::Command(Command::SetGoalieSide(Side::Left))]
            }
            Key::Right | Key::D if playing => {
                vec![Intent::Command(Command::SetGoalieSide(Side::Right))]
            }
            Key::Enter | Key::Space if !playing => vec![Intent::Command(Command::StartRound)],
            Key::Escape => vec![Intent::Host(HostAction::Quit)],
            Key::M => vec![Intent::Host(HostAction::ToggleMute)],
            Key::F1 => {
                let was_active = self.infinite_lives_active();
                self.debug_mode = !self.debug_mode;
                log::info!("Debug mode {}", if self.debug_mode { "on" } else { "off" });
                let mut intents = vec![Intent::Host(HostAction::ToggleDebug)];
                if self.infinite_lives_active() != was_active {
                    intents.push(self.infinite_lives_intent());
                }
                intents
            }
            Key::F2 => {
                self.infinite_lives = !self.infinite_lives;
                if self.debug_mode {
                    vec![self.infinite_lives_intent()]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    fn infinite_lives_intent(&self) -> Intent {
        Intent::Command(Command::SetInfiniteLives(self.infinite_lives_active()))
    }
}
