mod reference_dto;

pub use reference_dto::{StatesResponse, SubjectsResponse};
