//! Host input mapping
//!
//! Hosts report raw signals (keys, hardware wheel/button, on-screen buttons);
//! [`InputMapper`] turns them into edge-triggered [`InputEvent`]s for the
//! session. A device without the hardware wheel or side button simply never
//! sends those signals; keyboard and buttons keep working.

use serde::{Deserialize, Serialize};

use crate::sim::GamePhase;

/// Session commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Jump,
    Start,
    Restart,
}

/// Raw signals from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostSignal {
    /// Space key pressed (also sent for keyboard auto-repeat)
    SpaceDown,
    SpaceUp,
    /// Hardware side button
    SideClick,
    /// Hardware scroll wheel moved up
    ScrollUp,
    StartButton,
    RestartButton,
    JumpButton,
}

/// Tracks held keys so a held key fires once
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    space_held: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a host signal given the current phase. `None` means nothing to do.
    pub fn map(&mut self, signal: HostSignal, phase: GamePhase) -> Option<InputEvent> {
        let running = phase == GamePhase::Running;
        match signal {
            HostSignal::SpaceDown => {
                if self.space_held {
                    return None;
                }
                self.space_held = true;
                Some(start_or_jump(running))
            }
            HostSignal::SpaceUp => {
                self.space_held = false;
                None
            }
            HostSignal::SideClick => Some(start_or_jump(running)),
            HostSignal::ScrollUp => running.then_some(InputEvent::Jump),
            HostSignal::StartButton => Some(InputEvent::Start),
            HostSignal::RestartButton => Some(InputEvent::Restart),
            HostSignal::JumpButton => Some(InputEvent::Jump),
        }
    }

    /// Forget held keys (e.g. when the host loses focus)
    pub fn reset(&mut self) {
        self.space_held = false;
    }
}

fn start_or_jump(running: bool) -> InputEvent {
    if running {
        InputEvent::Jump
    } else {
        InputEvent::Start
    }
}
