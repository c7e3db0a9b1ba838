use std::sync::{Mutex, OnceLock, PoisonError};

/// A value built at most once by a fallible initializer.
///
/// The first successful build is kept. Callers racing the first build wait
/// on the mutex instead of building a second copy; a failed build stores
/// nothing, so the next call runs the initializer again.
#[derive(Debug)]
pub(crate) struct InitOnce<T> {
    cell: OnceLock<T>,
    init_lock: Mutex<()>,
}

impl<T> InitOnce<T> {
    pub(crate) fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    pub(crate) fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub(crate) fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have finished while we waited
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        let value = init()?;
        Ok(self.cell.get_or_init(|| value))
    }
}
