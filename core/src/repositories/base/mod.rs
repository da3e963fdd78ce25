pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub use r#trait::{Entity, Repository};

#[cfg(any(test, feature = "mock"))]
pub mod memory;
#[cfg(any(test, feature = "mock"))]
pub use memory::InMemoryRepository;

#[cfg(test)]
mod tests;
