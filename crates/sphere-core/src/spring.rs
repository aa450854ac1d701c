/// Linear interpolation `current + (target - current) * t`.
#[inline]
pub fn lerp(current: f32, target: f32, t: f32) -> f32 {
    current + (target - current) * t
}

/// Exponential-approach smoother: each [`step`](Spring::step) moves `current`
/// a fixed fraction of the remaining distance toward `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub current: f32,
    pub target: f32,
    pub speed: f32,
}

impl Spring {
    pub fn new(current: f32, target: f32, speed: f32) -> Self {
        Self {
            current,
            target,
            speed,
        }
    }

    /// Advance one frame and return the new value.
    ///
    /// Once the remaining step is too small to change `current` it lands on
    /// `target`, so a settled spring reports exactly its target.
    pub fn step(&mut self) -> f32 {
        let next = lerp(self.current, self.target, self.speed);
        self.current = if next == self.current && self.speed > 0.0 {
            self.target
        } else {
            next
        };
        self.current
    }

    pub fn distance(&self) -> f32 {
        (self.target - self.current).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.0, 1500.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 1500.0, 1.0), 1500.0);
        assert_eq!(lerp(0.0, 1500.0, 0.05), 75.0);
    }

    #[test]
    fn step_moves_fraction_of_gap() {
        let mut s = Spring::new(0.0, 200.0, 0.02);
        assert!((s.step() - 4.0).abs() < 1e-5);
        assert!((s.step() - 7.92).abs() < 1e-4);
    }

    #[test]
    fn stalled_step_lands_on_target() {
        // One ulp below the target: 5% of the gap rounds away in f32.
        let one_ulp_short = f32::from_bits(1500.0_f32.to_bits() - 1);
        let mut s = Spring::new(one_ulp_short, 1500.0, 0.05);
        assert_eq!(s.step(), 1500.0);
        assert_eq!(s.distance(), 0.0);
    }

    #[test]
    fn frozen_spring_does_not_jump() {
        let mut s = Spring::new(3.0, 9.0, 0.0);
        assert_eq!(s.step(), 3.0);
    }

    #[test]
    fn settled_spring_stays_put() {
        let mut s = Spring::new(5.0, 5.0, 0.3);
        s.step();
        assert_eq!(s.current, 5.0);
        assert_eq!(s.distance(), 0.0);
    }
}
