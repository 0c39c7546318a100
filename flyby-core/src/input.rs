/// Per-frame camera input
use std::fmt;
use std::str::FromStr;

use crate::error::FlybyError;

/// The twelve camera controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

impl CameraAction {
    pub const ALL: [CameraAction; 12] = [
        Self::MoveForward,
        Self::MoveBack,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::PitchUp,
        Self::PitchDown,
        Self::YawLeft,
        Self::YawRight,
        Self::RollLeft,
        Self::RollRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::MoveForward => "move_forward",
            Self::MoveBack => "move_back",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::PitchUp => "pitch_up",
            Self::PitchDown => "pitch_down",
            Self::YawLeft => "yaw_left",
            Self::YawRight => "yaw_right",
            Self::RollLeft => "roll_left",
            Self::RollRight => "roll_right",
        }
    }
}

impl fmt::Display for CameraAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `move_forward` and `moveForward` spellings
impl FromStr for CameraAction {
    type Err = FlybyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|action| action.name().replace('_', "") == folded)
            .ok_or_else(|| FlybyError::UnknownAction(s.to_string()))
    }
}

/// Immutable snapshot of which controls are held during one frame.
///
/// The input layer builds one per frame and hands it to
/// [`Camera::update`](crate::Camera::update); the camera never reads input
/// state from anywhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraInput {
    pub move_forward: bool,
    pub move_back: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
}

impl CameraInput {
    pub fn from_actions(actions: &[CameraAction]) -> Self {
        let mut input = Self::default();
        for action in actions {
            input.set(*action, true);
        }
        input
    }

    fn slot(&mut self, action: CameraAction) -> &mut bool {
        match action {
            CameraAction::MoveForward => &mut self.move_forward,
            CameraAction::MoveBack => &mut self.move_back,
            CameraAction::MoveLeft => &mut self.move_left,
            CameraAction::MoveRight => &mut self.move_right,
            CameraAction::MoveUp => &mut self.move_up,
            CameraAction::MoveDown => &mut self.move_down,
            CameraAction::PitchUp => &mut self.pitch_up,
            CameraAction::PitchDown => &mut self.pitch_down,
            CameraAction::YawLeft => &mut self.yaw_left,
            CameraAction::YawRight => &mut self.yaw_right,
            CameraAction::RollLeft => &mut self.roll_left,
            CameraAction::RollRight => &mut self.roll_right,
        }
    }

    pub fn set(&mut self, action: CameraAction, active: bool) {
        *self.slot(action) = active;
    }

    pub fn is_active(&self, action: CameraAction) -> bool {
        match action {
            CameraAction::MoveForward => self.move_forward,
            CameraAction::MoveBack => self.move_back,
            CameraAction::MoveLeft => self.move_left,
            CameraAction::MoveRight => self.move_right,
            CameraAction::MoveUp => self.move_up,
            CameraAction::MoveDown => self.move_down,
            CameraAction::PitchUp => self.pitch_up,
            CameraAction::PitchDown => self.pitch_down,
            CameraAction::YawLeft => self.yaw_left,
            CameraAction::YawRight => self.yaw_right,
            CameraAction::RollLeft => self.roll_left,
            CameraAction::RollRight => self.roll_right,
        }
    }

    pub fn any(&self) -> bool {
        CameraAction::ALL.into_iter().any(|action| self.is_active(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action_names() {
        assert_eq!("move_forward".parse::<CameraAction>().unwrap(), CameraAction::MoveForward);
        assert_eq!("moveForward".parse::<CameraAction>().unwrap(), CameraAction::MoveForward);
        assert_eq!("ROLL-RIGHT".parse::<CameraAction>().unwrap(), CameraAction::RollRight);
        for action in CameraAction::ALL {
            assert_eq!(action.to_string().parse::<CameraAction>().unwrap(), action);
        }
        assert!(matches!(
            "barrel_roll".parse::<CameraAction>(),
            Err(FlybyError::UnknownAction(name)) if name == "barrel_roll"
        ));
    }

    #[test]
    fn test_set_and_query() {
        let mut input = CameraInput::default();
        assert!(!input.any());

        input.set(CameraAction::YawLeft, true);
        assert!(input.yaw_left);
        assert!(input.is_active(CameraAction::YawLeft));
        assert!(!input.is_active(CameraAction::YawRight));
        assert!(input.any());

        input.set(CameraAction::YawLeft, false);
        assert_eq!(input, CameraInput::default());
    }

    #[test]
    fn test_from_actions() {
        let input = CameraInput::from_actions(&[CameraAction::MoveUp, CameraAction::RollLeft]);
        assert!(input.move_up && input.roll_left);
        assert_eq!(CameraAction::ALL.iter().filter(|a| input.is_active(**a)).count(), 2);
    }
}
