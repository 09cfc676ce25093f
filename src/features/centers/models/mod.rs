mod center;

pub use center::{seed_centers, Center};
