pub mod foundation;
pub mod registry;

pub use foundation::*;
pub use registry::*;
