use crate::errors::GameError;
use crate::world::Direction;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The six discrete signals the renderer forwards to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Direction(Direction),
    A,
    B,
}

impl Button {
    pub const UP: Button = Button::Direction(Direction::Up);
    pub const DOWN: Button = Button::Direction(Direction::Down);
    pub const LEFT: Button = Button::Direction(Direction::Left);
    pub const RIGHT: Button = Button::Direction(Direction::Right);
}

impl FromStr for Button {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Button::UP),
            "down" => Ok(Button::DOWN),
            "left" => Ok(Button::LEFT),
            "right" => Ok(Button::RIGHT),
            "a" => Ok(Button::A),
            "b" => Ok(Button::B),
            other => Err(GameError::UnknownButton(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("up", Button::UP)]
    #[case(" Down ", Button::DOWN)]
    #[case("left", Button::LEFT)]
    #[case("RIGHT", Button::RIGHT)]
    #[case("a", Button::A)]
    #[case("b", Button::B)]
    fn test_parse_buttons(#[case] input: &str, #[case] expected: Button) {
        assert_eq!(input.parse::<Button>(), Ok(expected));
    }

    #[test]
    fn test_unknown_button() {
        assert_eq!(
            "start".parse::<Button>(),
            Err(GameError::UnknownButton("start".to_string()))
        );
    }
}
