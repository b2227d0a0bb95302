/// The inverse golden ratio `(√5 - 1) / 2`.
pub(super) const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Golden section bracket.
///
/// Maintains the outer interval `[left, right]` and two interior points
/// positioned according to the golden ratio, so each shrink reuses one of
/// them.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,

    /// Inner left point at `left + (1 - φ⁻¹) * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `left + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    pub(super) fn new([left, right]: [f64; 2]) -> Self {
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + (1.0 - INV_PHI) * width,
            inner_right: left + INV_PHI * width,
        }
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Shrinks to `[left, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`. Returns the new
    /// `inner_left`, which still has to be evaluated.
    pub(super) fn shrink_right(&mut self) -> f64 {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
        self.inner_left
    }

    /// Shrinks to `[inner_left, right]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`. Returns the new
    /// `inner_right`, which still has to be evaluated.
    pub(super) fn shrink_left(&mut self) -> f64 {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
        self.inner_right
    }
}
