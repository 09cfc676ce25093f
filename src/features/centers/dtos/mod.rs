mod center_dto;

pub use center_dto::{
    CenterResponse, CentersListResponse, CreateCenterDto, CreateCenterResponse, SearchFilters,
    SearchQuery, SearchResponse,
};
