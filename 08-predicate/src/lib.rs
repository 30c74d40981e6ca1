#![forbid(unsafe_code)]

////////////////////////////////////////////////////////////////////////////////

type Check<T> = dyn Fn(&T) -> bool;

/// A boolean test over `&T` that can be combined with other tests. The
/// combinators consume their operands and evaluate left to right with
/// short-circuiting.
pub struct Predicate<T> {
    check: Box<Check<T>>,
}

impl<T: 'static> Predicate<T> {
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Self {
            check: Box::new(func),
        }
    }

    pub fn always() -> Self {
        Self::from_fn(|_| true)
    }

    pub fn never() -> Self {
        Self::from_fn(|_| false)
    }

    pub fn test(&self, value: &T) -> bool {
        (self.check)(value)
    }

    pub fn and(self, other: Self) -> Self {
        Self::from_fn(move |value| self.test(value) && other.test(value))
    }

    pub fn or(self, other: Self) -> Self {
        Self::from_fn(move |value| self.test(value) || other.test(value))
    }

    pub fn not(self) -> Self {
        Self::from_fn(move |value| !self.test(value))
    }
}

////////////////////////////////////////////////////////////////////////////////
