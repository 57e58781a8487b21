pub mod garden;
pub mod grid;
pub mod logger;
pub mod maze;
pub mod stone;
pub mod warehouse;
