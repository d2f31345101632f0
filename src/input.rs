/// Discrete player intents, already decoupled from raw key codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    MoveLeft,
    MoveRight,
    Fire,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Input {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Input::MoveLeft => Some(Direction::Left),
            Input::MoveRight => Some(Direction::Right),
            Input::Fire | Input::Restart => None,
        }
    }
}
