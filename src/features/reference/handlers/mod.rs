pub mod reference_handler;

pub use reference_handler::{__path_list_states, __path_list_subjects, list_states, list_subjects};
