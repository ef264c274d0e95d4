//! Mini-games the pet can play for happiness and coins
//!
//! Both games share the same stakes (happiness up and a coin reward on a
//! win, happiness down on a loss) and differ only in how the challenge is
//! generated and checked. The set is closed, so a tagged enum carries the
//! variants instead of an open trait hierarchy.

use rand::Rng;

use crate::core::config::SimConfig;

/// Which mini-game to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    /// Guess a secret number in [1, 100]
    Guessing,
    /// Add two numbers drawn from [1, 10]
    Arithmetic,
}

/// One generated challenge, waiting for the player's answer
///
/// Generation is separated from resolution so the menu layer can show the
/// question (or in the guessing game, take a blind guess) before the answer
/// is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    Guessing { secret: i32 },
    Arithmetic { a: i32, b: i32 },
}

impl Challenge {
    /// Draw a fresh challenge of the given kind
    pub fn generate(kind: GameKind, rng: &mut impl Rng) -> Self {
        match kind {
            GameKind::Guessing => Challenge::Guessing {
                secret: rng.gen_range(1..=100),
            },
            GameKind::Arithmetic => Challenge::Arithmetic {
                a: rng.gen_range(1..=10),
                b: rng.gen_range(1..=10),
            },
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Challenge::Guessing { .. } => GameKind::Guessing,
            Challenge::Arithmetic { .. } => GameKind::Arithmetic,
        }
    }

    /// The answer that wins this challenge
    pub fn solution(&self) -> i32 {
        match self {
            Challenge::Guessing { secret } => *secret,
            Challenge::Arithmetic { a, b } => a + b,
        }
    }

    /// Judge the player's answer and settle the stakes
    pub fn resolve(&self, answer: i32, config: &SimConfig) -> GameOutcome {
        let solution = self.solution();
        if answer == solution {
            GameOutcome {
                won: true,
                happiness_delta: config.game_happiness_win,
                reward: config.game_reward,
                solution,
            }
        } else {
            GameOutcome {
                won: false,
                happiness_delta: -config.game_happiness_loss,
                reward: 0,
                solution,
            }
        }
    }
}

/// Result of a settled challenge
///
/// `solution` is always carried so a losing player can be shown what the
/// right answer was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    /// Signed happiness change (positive on a win)
    pub happiness_delta: i32,
    /// Coins earned; zero on a loss
    pub reward: i64,
    pub solution: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn guessing_draws_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            match Challenge::generate(GameKind::Guessing, &mut rng) {
                Challenge::Guessing { secret } => assert!((1..=100).contains(&secret)),
                other => panic!("wrong variant: {:?}", other),
            }
        }
    }

    #[test]
    fn arithmetic_draws_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            match Challenge::generate(GameKind::Arithmetic, &mut rng) {
                Challenge::Arithmetic { a, b } => {
                    assert!((1..=10).contains(&a));
                    assert!((1..=10).contains(&b));
                }
                other => panic!("wrong variant: {:?}", other),
            }
        }
    }

    #[test]
    fn correct_answer_wins_the_stakes() {
        let config = SimConfig::default();
        let challenge = Challenge::Arithmetic { a: 3, b: 4 };
        let outcome = challenge.resolve(7, &config);

        assert!(outcome.won);
        assert_eq!(outcome.happiness_delta, 20);
        assert_eq!(outcome.reward, 10);
        assert_eq!(outcome.solution, 7);
    }

    #[test]
    fn wrong_answer_costs_happiness_and_pays_nothing() {
        let config = SimConfig::default();
        let challenge = Challenge::Guessing { secret: 42 };
        let outcome = challenge.resolve(41, &config);

        assert!(!outcome.won);
        assert_eq!(outcome.happiness_delta, -10);
        assert_eq!(outcome.reward, 0);
        assert_eq!(outcome.solution, 42, "loss must reveal the secret");
    }
}
