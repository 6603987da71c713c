pub mod file_key_value_store;
pub mod hashmap_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use hashmap_key_value_store::HashMapKeyValueStore;
