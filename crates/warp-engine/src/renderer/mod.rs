pub mod instance;
pub mod surface;
