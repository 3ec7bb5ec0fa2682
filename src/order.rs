//! Ordering resolution for queue elements
//!
//! A heap compares elements on every structural step; this module decides
//! *how*. Either the caller injects a comparison function when the queue is
//! built, or the element type's own partial order is consulted (and checked)
//! at each comparison.

use std::cmp::Ordering;
use std::fmt;

use crate::traits::QueueError;

/// An injected total-order comparison function over elements.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Resolves the relative priority of two elements.
///
/// The mode is fixed when the owning queue is constructed:
///
/// - **Injected**: a [`Comparator`] supplied by the caller. It is always
///   used, even when the elements carry an intrinsic order of their own, and
///   it places no trait bound on the element type.
/// - **Intrinsic**: the element type's [`PartialOrd`]. `partial_cmp`
///   returning `None` means the pair has no defined order, and the
///   comparison fails with [`QueueError::IncomparableElements`].
///
/// The intrinsic check happens on every comparison, not once up front: the
/// first element of a queue is stored without any comparison, so a queue can
/// hold a single unordered value (a NaN, say) and only fail at the moment an
/// order between two concrete elements is actually needed.
pub struct OrderResolver<T> {
    mode: Mode<T>,
}

enum Mode<T> {
    Injected(Comparator<T>),
    Intrinsic(fn(&T, &T) -> Option<Ordering>),
}

impl<T: PartialOrd> OrderResolver<T> {
    /// Resolver backed by the element type's own partial order.
    pub fn intrinsic() -> Self {
        Self {
            mode: Mode::Intrinsic(T::partial_cmp),
        }
    }
}

impl<T> OrderResolver<T> {
    /// Resolver backed by an injected comparison function.
    pub fn injected(compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Self {
            mode: Mode::Injected(Box::new(compare)),
        }
    }

    /// Three-way comparison of `a` against `b` under the active mode.
    ///
    /// # Errors
    /// [`QueueError::IncomparableElements`] in intrinsic mode when the pair
    /// has no defined order. Injected comparators never fail.
    pub fn resolve(&self, a: &T, b: &T) -> Result<Ordering, QueueError> {
        match &self.mode {
            Mode::Injected(compare) => Ok(compare(a, b)),
            Mode::Intrinsic(partial_cmp) => {
                partial_cmp(a, b).ok_or(QueueError::IncomparableElements)
            }
        }
    }
}

impl<T> fmt::Debug for OrderResolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mode {
            Mode::Injected(_) => f.write_str("OrderResolver::Injected"),
            Mode::Intrinsic(_) => f.write_str("OrderResolver::Intrinsic"),
        }
    }
}
