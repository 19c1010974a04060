use std::sync::OnceLock;

/// Compute-once cell backing every lazily-derived quantity.
///
/// The first successful computation is stored and every later read returns
/// the stored value without re-running the closure, even across threads.
/// Errors are returned to the caller and nothing is stored; the computations
/// are deterministic, so a failing cell fails identically on every read.
#[derive(Debug, Clone, Default)]
pub(crate) struct Memo<T> {
    slot: OnceLock<T>,
}

impl<T: Copy> Memo<T> {
    pub(crate) fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    pub(crate) fn get_or_try_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        if let Some(value) = self.slot.get() {
            return Ok(*value);
        }
        let value = init()?;
        // If another thread won the race, its value is the one kept.
        Ok(*self.slot.get_or_init(|| value))
    }
}
