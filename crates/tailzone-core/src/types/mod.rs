mod device;
mod serial;
pub(crate) mod zone;

pub use device::*;
pub use serial::*;
pub use zone::*;
