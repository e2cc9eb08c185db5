//! Coordinate axes

/// One of the three world axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axes in carving order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vec3`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;

    #[test]
    fn test_index_selects_component() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let picked: Vec<f32> = Axis::ALL.into_iter().map(|axis| v[axis.index()]).collect();
        assert_eq!(picked, vec![1.0, 2.0, 3.0]);
    }
}
