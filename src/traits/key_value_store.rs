use crate::errors::RtlForgeResult;

/// Synchronous string store used for form persistence.
///
/// Implementations report every failure as `RtlForgeError::Persistence`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> RtlForgeResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> RtlForgeResult<()>;

    fn remove(&self, key: &str) -> RtlForgeResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> RtlForgeResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> RtlForgeResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> RtlForgeResult<()> {
        (**self).remove(key)
    }
}
