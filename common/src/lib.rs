pub mod config;
pub mod games;
pub mod logger;

pub use games::connect_five;
pub use games::SessionRng;
