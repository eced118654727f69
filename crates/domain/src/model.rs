pub mod almanac;
pub mod chain;
pub mod mapping;
pub mod mapping_range;

pub use almanac::Almanac;
pub use chain::MappingChain;
pub use mapping::Mapping;
pub use mapping_range::{Direction, MappingRange};
