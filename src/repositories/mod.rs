mod shared_registry;
mod traits;

pub use shared_registry::SharedContactRegistry;
pub use traits::ContactRepository;
