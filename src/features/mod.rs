pub mod centers;
pub mod reference;
pub mod system;
