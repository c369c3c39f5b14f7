//! Dispose-once wrapper for engine handles.
//!
//! Engine state is released exactly once via `dispose()`; every later access
//! (including a second dispose) reports `UseAfterDispose` instead of being
//! silently ignored.

use crate::core::error::EngineError;

pub struct Disposable<T> {
    inner: Option<T>,
}

impl<T> Disposable<T> {
    pub fn new(inner: T) -> Self {
        Self { inner: Some(inner) }
    }

    pub fn get(&self) -> Result<&T, EngineError> {
        self.inner.as_ref().ok_or(EngineError::UseAfterDispose)
    }

    pub fn get_mut(&mut self) -> Result<&mut T, EngineError> {
        self.inner.as_mut().ok_or(EngineError::UseAfterDispose)
    }

    pub fn dispose(&mut self) -> Result<(), EngineError> {
        self.inner
            .take()
            .map(drop)
            .ok_or(EngineError::UseAfterDispose)
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispose_is_exactly_once() {
        let mut handle = Disposable::new(vec![1u8, 2, 3]);
        assert_eq!(handle.get().unwrap().len(), 3);

        handle.dispose().unwrap();
        assert!(handle.is_disposed());
        assert!(matches!(handle.get(), Err(EngineError::UseAfterDispose)));
        assert!(matches!(handle.get_mut(), Err(EngineError::UseAfterDispose)));
        assert!(matches!(
            handle.dispose(),
            Err(EngineError::UseAfterDispose)
        ));
    }
}
