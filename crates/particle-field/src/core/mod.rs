pub mod field;
pub mod particle;
pub mod rng;
pub mod time;
pub mod viewport;
