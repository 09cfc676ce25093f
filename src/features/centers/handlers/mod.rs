pub mod center_handler;

pub use center_handler::{
    __path_create_center, __path_get_center, __path_list_centers, __path_search_centers,
    create_center, get_center, list_centers, search_centers,
};
