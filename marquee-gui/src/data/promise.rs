use druid::Data;

use crate::error::Error;

#[derive(Clone, Debug, Data)]
pub enum Promise<T: Data, D: Data = (), E: Data = Error> {
    Empty,
    Deferred { def: D },
    Resolved { def: D, val: T },
    Rejected { def: D, err: E },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PromiseState {
    Empty,
    Deferred,
    Resolved,
    Rejected,
}

impl<T: Data, D: Data, E: Data> Promise<T, D, E> {
    pub fn state(&self) -> PromiseState {
        match self {
            Self::Empty => PromiseState::Empty,
            Self::Deferred { .. } => PromiseState::Deferred,
            Self::Resolved { .. } => PromiseState::Resolved,
            Self::Rejected { .. } => PromiseState::Rejected,
        }
    }

    pub fn is_deferred(&self, d: &D) -> bool
    where
        D: PartialEq,
    {
        matches!(self, Self::Deferred { def } if def == d)
    }

    /// True if the promise is loading or holding a value for `d`.
    pub fn contains(&self, d: &D) -> bool
    where
        D: PartialEq,
    {
        match self {
            Self::Deferred { def } | Self::Resolved { def, .. } => def == d,
            Self::Empty | Self::Rejected { .. } => false,
        }
    }

    pub fn resolved(&self) -> Option<&T> {
        if let Promise::Resolved { val, .. } = self {
            Some(val)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn defer(&mut self, def: D) {
        *self = Self::Deferred { def };
    }

    pub fn resolve(&mut self, def: D, val: T) {
        *self = Self::Resolved { def, val };
    }

    pub fn reject(&mut self, def: D, err: E) {
        *self = Self::Rejected { def, err };
    }

    pub fn resolve_or_reject(&mut self, def: D, res: Result<T, E>) {
        match res {
            Ok(val) => self.resolve(def, val),
            Err(err) => self.reject(def, err),
        }
    }

    /// Settle the promise, unless it has moved on to a different `def` in
    /// the meantime.
    pub fn update(&mut self, (def, res): (D, Result<T, E>))
    where
        D: PartialEq,
    {
        if self.is_deferred(&def) {
            self.resolve_or_reject(def, res);
        }
    }
}

impl<T: Data, D: Data, E: Data> Default for Promise<T, D, E> {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Loading = Promise<u32, u64>;

    fn failure() -> Error {
        Error::WebApiError("boom".into())
    }

    #[test]
    fn update_settles_matching_deferral() {
        let mut promise = Loading::default();
        promise.defer(1);
        promise.update((1, Ok(10)));
        assert_eq!(promise.resolved(), Some(&10));
    }

    #[test]
    fn update_drops_superseded_response() {
        let mut promise = Loading::default();
        promise.defer(1);
        promise.defer(2);
        promise.update((1, Ok(10)));
        assert!(promise.is_deferred(&2));
        promise.update((2, Ok(20)));
        promise.update((1, Ok(10)));
        assert_eq!(promise.resolved(), Some(&20));
    }

    #[test]
    fn rejection_is_not_contained() {
        let mut promise = Loading::default();
        promise.defer(3);
        assert!(promise.contains(&3));
        promise.update((3, Err(failure())));
        assert_eq!(promise.state(), PromiseState::Rejected);
        assert!(!promise.contains(&3));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut promise = Loading::default();
        promise.resolve(4, 40);
        assert!(promise.contains(&4));
        promise.clear();
        assert_eq!(promise.state(), PromiseState::Empty);
    }
}
