mod session_rng;

pub mod connect_five;

pub use session_rng::SessionRng;
