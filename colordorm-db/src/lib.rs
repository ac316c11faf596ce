pub mod client;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod mongo;
mod record;
pub mod store;
