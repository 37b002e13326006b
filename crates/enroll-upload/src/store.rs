use crate::Result;

/// Where avatar bytes end up. The submission handler only ever sees this
/// trait, so tests and alternative backends plug in without touching it.
pub trait ObjectStore {
    fn store_name(&self) -> &'static str;

    /// Stores `bytes` under `key`. One call per successful validation;
    /// failure is terminal for the submission attempt.
    fn upload(&self, key: &str, bytes: &[u8]) -> Result<()>;
}
