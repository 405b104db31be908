mod local_store;
mod memory_store;

pub use local_store::LocalAudioStore;
pub use memory_store::InMemoryAudioStore;
