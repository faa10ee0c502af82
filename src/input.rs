use std::collections::HashSet;

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

const ACTION_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    TurnLeft,
    TurnRight,
    Interact,
    Menu,
}

impl Action {
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::MoveForward,
        Action::MoveBackward,
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Interact,
        Action::Menu,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Edge-aware state of one action, advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Pressed,
    Held,
    Released,
}

impl ActionState {
    fn next(self, down: bool) -> Self {
        match (self, down) {
            (Self::Idle | Self::Released, true) => Self::Pressed,
            (Self::Pressed | Self::Held, true) => Self::Held,
            (Self::Pressed | Self::Held, false) => Self::Released,
            (Self::Idle | Self::Released, false) => Self::Idle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Binding {
    Key(KeyCode),
    Mouse(MouseButton),
}

/// Read side of the input system, used by gameplay code.
pub trait InputQuery {
    fn state(&self, action: Action) -> ActionState;

    fn is_pressed(&self, action: Action) -> bool {
        self.state(action) == ActionState::Pressed
    }

    fn is_held(&self, action: Action) -> bool {
        self.state(action) == ActionState::Held
    }

    fn is_released(&self, action: Action) -> bool {
        self.state(action) == ActionState::Released
    }

    /// Pressed this frame or still held.
    fn is_down(&self, action: Action) -> bool {
        matches!(self.state(action), ActionState::Pressed | ActionState::Held)
    }
}

pub struct InputSystem {
    bindings: Vec<(Action, Binding)>,
    down: HashSet<Binding>,
    states: [ActionState; ACTION_COUNT],
}

impl Default for InputSystem {
    fn default() -> Self {
        use Action::*;
        use Binding::*;

        let bindings = vec![
            (MoveForward, Key(KeyCode::KeyW)),
            (MoveBackward, Key(KeyCode::KeyS)),
            (MoveLeft, Key(KeyCode::KeyA)),
            (MoveRight, Key(KeyCode::KeyD)),
            (MoveUp, Key(KeyCode::Space)),
            (MoveDown, Key(KeyCode::ControlLeft)),
            (TurnLeft, Mouse(MouseButton::Left)),
            (TurnLeft, Key(KeyCode::ArrowLeft)),
            (TurnRight, Mouse(MouseButton::Right)),
            (TurnRight, Key(KeyCode::ArrowRight)),
            (Interact, Key(KeyCode::KeyE)),
            (Menu, Key(KeyCode::Escape)),
        ];
        Self::with_bindings(bindings)
    }
}

impl InputSystem {
    pub fn with_bindings(bindings: Vec<(Action, Binding)>) -> Self {
        Self {
            bindings,
            down: HashSet::new(),
            states: [ActionState::Idle; ACTION_COUNT],
        }
    }

    pub fn bind(&mut self, action: Action, binding: Binding) {
        self.bindings.push((action, binding));
    }

    /// Record a raw key or button transition from the window.
    pub fn set(&mut self, binding: Binding, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.down.insert(binding);
            }
            ElementState::Released => {
                self.down.remove(&binding);
            }
        }
    }

    /// Forget all raw input, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.down.clear();
    }

    /// Advance every action by one frame from the current raw input.
    pub fn update(&mut self) {
        for action in Action::ALL {
            let down = self
                .bindings
                .iter()
                .any(|(a, b)| *a == action && self.down.contains(b));
            let slot = &mut self.states[action.index()];
            *slot = slot.next(down);
        }
    }
}

impl InputQuery for InputSystem {
    fn state(&self, action: Action) -> ActionState {
        self.states[action.index()]
    }
}
