use crate::Position;
use serde::Deserialize;
use serde::Serialize;

/// Turn pointer over a fixed seating order.
///
/// `turn_num` counts rotations: it starts at 1 and ticks every time the
/// pointer wraps back to the first seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rotation {
    turn_idx: Position,
    turn_num: u32,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            turn_idx: 0,
            turn_num: 1,
        }
    }
}

impl Rotation {
    pub fn turn_idx(&self) -> Position {
        self.turn_idx
    }
    pub fn turn_num(&self) -> u32 {
        self.turn_num
    }
    /// Hand the turn to the next seat out of `seats`.
    pub fn advance(&mut self, seats: usize) {
        self.turn_idx = (self.turn_idx + 1) % seats.max(1);
        if self.turn_idx == 0 {
            self.turn_num += 1;
        }
    }
    pub fn is_valid(&self, seats: usize) -> bool {
        self.turn_idx < seats && self.turn_num >= 1
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "T{}:P{}", self.turn_num, self.turn_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_counts() {
        let mut rotation = Rotation::default();
        rotation.advance(3);
        assert_eq!((rotation.turn_idx(), rotation.turn_num()), (1, 1));
        rotation.advance(3);
        assert_eq!((rotation.turn_idx(), rotation.turn_num()), (2, 1));
        rotation.advance(3);
        assert_eq!((rotation.turn_idx(), rotation.turn_num()), (0, 2));
    }

    #[test]
    fn single_seat_wraps_every_pass() {
        let mut rotation = Rotation::default();
        rotation.advance(1);
        rotation.advance(1);
        assert_eq!((rotation.turn_idx(), rotation.turn_num()), (0, 3));
        assert!(rotation.is_valid(1));
    }

    #[test]
    fn pointer_always_in_range() {
        let mut rotation = Rotation::default();
        for _ in 0..100 {
            rotation.advance(4);
            assert!(rotation.is_valid(4));
        }
        assert_eq!(rotation.turn_num(), 26);
    }
}
