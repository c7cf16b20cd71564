mod board;
mod not_found;

pub use board::Board;
pub use not_found::NotFound;
