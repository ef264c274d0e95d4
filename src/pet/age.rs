//! Age - a monotonic turn counter

/// Number of completed turns the pet has lived through
///
/// Advances by exactly one per completed turn and never goes backward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Age {
    turns: u64,
}

impl Age {
    /// A newborn pet (zero turns)
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore an age from a save file
    pub fn at(turns: u64) -> Self {
        Self { turns }
    }

    /// Count one more completed turn
    pub fn advance(&mut self) {
        self.turns += 1;
    }

    /// Turns lived so far
    pub fn get(&self) -> u64 {
        self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_one_turn_at_a_time() {
        let mut age = Age::new();
        assert_eq!(age.get(), 0);
        age.advance();
        age.advance();
        assert_eq!(age.get(), 2);
    }
}
