pub mod system_handler;

pub use system_handler::{__path_health_check, __path_home, health_check, home};
