pub mod clock;
pub mod grid;
