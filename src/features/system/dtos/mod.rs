mod system_dto;

pub use system_dto::{EndpointMap, HealthResponse, ServiceInfoResponse};
