//! Binary polynomial types.

/// Which bonds are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Every stored bond, including wraparound ones.
    #[default]
    Periodic,
    /// Drops bonds that cross an edge of a layer or wrap from the top
    /// layer back to the bottom one.
    Open,
}

/// One monomial `coefficient · Π x_v` over binary variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub coefficient: f64,
    /// Variable indices, sorted ascending. Never empty.
    pub variables: Vec<usize>,
}

impl Term {
    /// Value on a binary configuration.
    ///
    /// # Panics
    ///
    /// Panics if a variable index is out of range for `configuration`.
    /// [`BinaryPolynomial::evaluate`](super::BinaryPolynomial::evaluate)
    /// checks the length first.
    pub fn evaluate(&self, configuration: &[bool]) -> f64 {
        if self.variables.iter().all(|&v| configuration[v]) {
            self.coefficient
        } else {
            0.0
        }
    }
}
