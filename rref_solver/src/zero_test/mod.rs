/// Decides whether a matrix entry counts as zero during pivoting and
/// consistency checks.
///
/// `Exact` is plain `== 0.0`, so round-off residue such as `1e-17` is a valid
/// pivot. `Tolerance(eps)` treats anything with `|v| <= eps` as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ZeroTest {
    #[default]
    Exact,
    Tolerance(f64),
}

impl ZeroTest {
    pub fn is_zero(&self, value: f64) -> bool {
        match self {
            Self::Exact => value == 0.0,
            Self::Tolerance(eps) => value.abs() <= *eps,
        }
    }

    pub fn is_nonzero(&self, value: f64) -> bool {
        !self.is_zero(value)
    }
}
