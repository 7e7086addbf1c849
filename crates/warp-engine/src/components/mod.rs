pub mod color;
pub mod star;
