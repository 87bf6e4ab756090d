pub mod file;
pub mod traits;

// Re-export
pub use file::FileConfigRepository;
pub use traits::ConfigRepository;
