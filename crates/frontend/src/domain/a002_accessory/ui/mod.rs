mod manager;

pub use manager::AccessoryManager;
