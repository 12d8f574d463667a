pub mod system;
pub mod translation;
pub mod utils;
