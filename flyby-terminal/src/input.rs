/// Key events to camera input snapshots
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flyby_core::{CameraAction, CameraInput};

/// What a key event meant to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Quit,
    Action(CameraAction),
    Ignored,
}

/// Default key layout.
///
/// Arrows pitch and yaw, WASD moves in the horizontal plane, Q/E roll,
/// F/R move up and down.
pub fn action_for(code: KeyCode) -> Option<CameraAction> {
    let action = match code {
        KeyCode::Up => CameraAction::PitchUp,
        KeyCode::Down => CameraAction::PitchDown,
        KeyCode::Left => CameraAction::YawLeft,
        KeyCode::Right => CameraAction::YawRight,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => CameraAction::MoveForward,
            's' => CameraAction::MoveBack,
            'a' => CameraAction::MoveLeft,
            'd' => CameraAction::MoveRight,
            'q' => CameraAction::RollLeft,
            'e' => CameraAction::RollRight,
            'f' => CameraAction::MoveUp,
            'r' => CameraAction::MoveDown,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// Tracks which controls are held between frames.
///
/// Terminals that report key releases give true hold semantics: press sets,
/// release clears. Elsewhere a press (or auto-repeat) is active for the
/// next snapshot only.
#[derive(Debug, Default)]
pub struct KeyMapper {
    held: CameraInput,
    pulses: CameraInput,
    releases_reported: bool,
}

impl KeyMapper {
    pub fn new(releases_reported: bool) -> Self {
        Self {
            releases_reported,
            ..Self::default()
        }
    }

    pub fn handle(&mut self, event: &KeyEvent) -> KeyOutcome {
        let quit = event.code == KeyCode::Esc
            || (event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            return if event.kind == KeyEventKind::Release {
                KeyOutcome::Ignored
            } else {
                KeyOutcome::Quit
            };
        }

        let Some(action) = action_for(event.code) else {
            return KeyOutcome::Ignored;
        };

        match (event.kind, self.releases_reported) {
            (KeyEventKind::Release, true) => self.held.set(action, false),
            (KeyEventKind::Release, false) => {}
            (_, true) => self.held.set(action, true),
            (_, false) => self.pulses.set(action, true),
        }
        KeyOutcome::Action(action)
    }

    /// Input for this frame. One-frame presses are consumed.
    pub fn snapshot(&mut self) -> CameraInput {
        let mut input = self.held;
        for action in CameraAction::ALL {
            if self.pulses.is_active(action) {
                input.set(action, true);
            }
        }
        self.pulses = CameraInput::default();
        input
    }

    /// Drop every held control, e.g. after the terminal loses focus
    pub fn release_all(&mut self) {
        self.held = CameraInput::default();
        self.pulses = CameraInput::default();
    }
}
