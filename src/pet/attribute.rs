//! Bounded attributes - the gauges that make up a pet's condition

/// An integer gauge clamped to an inclusive range
///
/// Every mutation clamps; callers never get an error for overshooting, the
/// value just sticks to the nearest bound. The invariant `min <= value <= max`
/// holds from construction onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedAttribute {
    value: i32,
    min: i32,
    max: i32,
}

impl BoundedAttribute {
    /// Create a gauge; the initial value is clamped into `[min, max]`
    pub fn new(initial: i32, min: i32, max: i32) -> Self {
        debug_assert!(min <= max);
        Self {
            value: initial.clamp(min, max),
            min,
            max,
        }
    }

    /// Raise the gauge, clamping at the upper bound
    pub fn raise(&mut self, delta: i32) {
        self.value = (self.value + delta).min(self.max);
    }

    /// Lower the gauge, clamping at the lower bound
    pub fn lower(&mut self, delta: i32) {
        self.value = (self.value - delta).max(self.min);
    }

    /// Overwrite the gauge, clamping into range (used when restoring a save)
    pub fn set(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Current value
    pub fn get(&self) -> i32 {
        self.value
    }

    /// Lower bound
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> i32 {
        self.max
    }

    /// True when the gauge sits on its lower bound
    pub fn is_depleted(&self) -> bool {
        self.value <= self.min
    }
}

/// The gauges a pet carries, by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Hunger,
    Happiness,
    Energy,
    Cleanliness,
    Health,
}

impl AttributeKind {
    /// Display name for menus and logs
    pub fn name(&self) -> &'static str {
        match self {
            AttributeKind::Hunger => "Hunger",
            AttributeKind::Happiness => "Happiness",
            AttributeKind::Energy => "Energy",
            AttributeKind::Cleanliness => "Cleanliness",
            AttributeKind::Health => "Health",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_clamps_at_max() {
        let mut attr = BoundedAttribute::new(50, 0, 100);
        attr.raise(500);
        assert_eq!(attr.get(), 100);
    }

    #[test]
    fn lower_clamps_at_min() {
        let mut attr = BoundedAttribute::new(50, 0, 100);
        attr.lower(500);
        assert_eq!(attr.get(), 0);
        assert!(attr.is_depleted());
    }

    #[test]
    fn initial_value_is_clamped() {
        let attr = BoundedAttribute::new(250, 0, 100);
        assert_eq!(attr.get(), 100);
    }

    #[test]
    fn set_clamps_into_range() {
        let mut attr = BoundedAttribute::new(50, 0, 100);
        attr.set(-40);
        assert_eq!(attr.get(), 0);
        attr.set(73);
        assert_eq!(attr.get(), 73);
    }
}
