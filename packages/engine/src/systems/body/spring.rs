use super::body::Body;

/// Damped linear connector between two bodies.
///
/// Endpoints are indices into the world's body list. Bodies are only removed
/// together with every spring (clear), so an index never dangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub a: usize,
    pub b: usize,
    pub rest_length: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    pub fn new(a: usize, b: usize, rest_length: f32, stiffness: f32, damping: f32) -> Self {
        Self { a, b, rest_length, stiffness, damping }
    }

    #[inline]
    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }

    pub fn validate(&self, body_count: usize) -> Result<(), String> {
        if self.a >= body_count || self.b >= body_count {
            return Err(format!(
                "spring endpoint out of range: ({}, {}) with {} bodies",
                self.a, self.b, body_count
            ));
        }
        if self.a == self.b {
            return Err("spring endpoints must be different bodies".to_string());
        }
        if !self.rest_length.is_finite() || self.rest_length < 0.0 {
            return Err(format!("spring rest length must be >= 0, got {}", self.rest_length));
        }
        if !self.stiffness.is_finite() || self.stiffness < 0.0 {
            return Err(format!("spring stiffness must be >= 0, got {}", self.stiffness));
        }
        if !self.damping.is_finite() {
            return Err("spring damping must be finite".to_string());
        }
        Ok(())
    }
}

/// Borrow two distinct bodies mutably
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_checks_indices_and_coefficients() {
        assert!(Spring::new(0, 1, 3.0, 50.0, 0.8).validate(2).is_ok());
        assert!(Spring::new(0, 2, 3.0, 50.0, 0.8).validate(2).is_err());
        assert!(Spring::new(1, 1, 3.0, 50.0, 0.8).validate(2).is_err());
        assert!(Spring::new(0, 1, -1.0, 50.0, 0.8).validate(2).is_err());
        assert!(Spring::new(0, 1, 3.0, -5.0, 0.8).validate(2).is_err());
    }

    #[test]
    fn touches_either_endpoint() {
        let s = Spring::new(2, 5, 1.0, 1.0, 0.0);
        assert!(s.touches(2) && s.touches(5));
        assert!(!s.touches(3));
    }
}
