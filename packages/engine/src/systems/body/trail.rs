use std::collections::VecDeque;

use crate::core::Vec3;

/// Number of past positions kept per body
pub const TRAIL_CAPACITY: usize = 50;

/// Bounded FIFO of recent positions, oldest first. Rendering only.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: VecDeque<Vec3>,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_CAPACITY + 1),
        }
    }

    /// Append a sample, evicting the oldest once the cap is exceeded
    pub fn push(&mut self, point: Vec3) {
        self.points.push_back(point);
        if self.points.len() > TRAIL_CAPACITY {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&Vec3> {
        self.points.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_most_recent_samples_in_order() {
        let mut trail = Trail::new();
        for i in 0..75 {
            trail.push(Vec3::xy(i as f32, 0.0));
        }

        assert_eq!(trail.len(), TRAIL_CAPACITY);
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        let expected: Vec<f32> = (25..75).map(|i| i as f32).collect();
        assert_eq!(xs, expected);
        assert_eq!(trail.latest().map(|p| p.x), Some(74.0));
    }
}
