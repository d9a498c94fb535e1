use crate::DIE_FACES;
use crate::Face;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Source of dig outcomes, uniform over `1..=DIE_FACES`.
///
/// Lives beside a session rather than inside it, so the persisted state
/// stays plain data and tests can swap in a predetermined sequence.
pub trait Die: Send + Sync {
    fn roll(&mut self) -> Face;
}

/// Fair die backed by a small fast generator.
#[derive(Debug, Clone)]
pub struct Dice(SmallRng);

impl Dice {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl From<Option<u64>> for Dice {
    fn from(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }
}

impl Die for Dice {
    fn roll(&mut self) -> Face {
        self.0.random_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of faces, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct Loaded {
    faces: Vec<Face>,
    next: usize,
}

impl From<Vec<Face>> for Loaded {
    fn from(faces: Vec<Face>) -> Self {
        Self { faces, next: 0 }
    }
}
impl From<Face> for Loaded {
    fn from(face: Face) -> Self {
        Self::from(vec![face])
    }
}

impl Die for Loaded {
    fn roll(&mut self) -> Face {
        let face = self
            .faces
            .get(self.next % self.faces.len().max(1))
            .copied()
            .unwrap_or(1)
            .clamp(1, DIE_FACES);
        self.next += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_stay_on_the_die() {
        let mut dice = Dice::default();
        assert!((0..1000).map(|_| dice.roll()).all(|f| (1..=DIE_FACES).contains(&f)));
    }

    #[test]
    fn dice_hit_every_face() {
        let mut dice = Dice::seeded(42);
        let mut seen = [false; DIE_FACES as usize];
        (0..1000).for_each(|_| seen[dice.roll() as usize - 1] = true);
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn seeded_dice_repeat() {
        let mut a = Dice::seeded(9);
        let mut b = Dice::seeded(9);
        assert!((0..64).all(|_| a.roll() == b.roll()));
    }

    #[test]
    fn loaded_cycles() {
        let mut die = Loaded::from(vec![6, 2]);
        assert_eq!([die.roll(), die.roll(), die.roll()], [6, 2, 6]);
    }

    #[test]
    fn loaded_clamps_bad_faces() {
        let mut die = Loaded::from(vec![0, 9]);
        assert_eq!([die.roll(), die.roll()], [1, DIE_FACES]);
        assert_eq!(Loaded::from(Vec::new()).roll(), 1);
    }
}
