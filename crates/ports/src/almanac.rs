// crates/ports/src/almanac.rs
use almanac_domain::Almanac;
use almanac_shared_kernel::Result;

/// Supplies a fully parsed almanac.
pub trait AlmanacLoader: Send + Sync {
    fn load(&self) -> Result<Almanac>;

    /// Short human-readable name of the source, used in logs and errors.
    fn describe(&self) -> String;
}
