//! Downstream generation interfaces: type mapping, naming conversion,
//! document rendering, and file emission

pub mod docs;
pub mod emit;
pub mod mapping;
pub mod naming;

pub use emit::Emitter;
pub use mapping::TargetType;
