use chrono::Local;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::centers::dtos::{CreateCenterDto, SearchFilters, SearchQuery};
use crate::features::centers::models::{seed_centers, Center};
use crate::shared::constants::{ALL_STATES_SENTINEL, ALL_SUBJECTS_SENTINEL, CURRENCY_PREFIX};

/// In-memory catalog of tuition centers.
///
/// Owns the collection behind a reader-writer lock; handlers only see the
/// four operations. Reads share the lock, while `create` takes it exclusively
/// so the max-id scan and the append happen as one atomic unit and assigned
/// ids stay unique under concurrent requests.
pub struct CatalogService {
    centers: RwLock<Vec<Center>>,
}

impl CatalogService {
    /// Catalog pre-loaded with the Malaysian seed dataset
    pub fn new() -> Self {
        Self::with_centers(seed_centers())
    }

    pub fn with_centers(centers: Vec<Center>) -> Self {
        Self {
            centers: RwLock::new(centers),
        }
    }

    /// Full collection in insertion order
    pub async fn list_all(&self) -> Vec<Center> {
        self.centers.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.centers.read().await.len()
    }

    /// First record with a matching id, or `NotFound`
    pub async fn get_by_id(&self, id: i64) -> Result<Center> {
        self.centers
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Center not found".to_string()))
    }

    /// Filter pipeline over a copy of the collection, stages AND-combined in
    /// fixed order, followed by one of three sort modes. Returns the matches
    /// plus the normalized criteria for client-side display. The collection
    /// itself is never touched.
    pub async fn search(&self, query: SearchQuery) -> (Vec<Center>, SearchFilters) {
        let mut results = self.centers.read().await.clone();

        let mut keyword = query.keyword;
        if !keyword.trim().is_empty() {
            keyword = keyword.trim().to_lowercase();
            results.retain(|c| {
                c.name.to_lowercase().contains(&keyword)
                    || c.subject.to_lowercase().contains(&keyword)
                    || c.description.to_lowercase().contains(&keyword)
                    || c.city.to_lowercase().contains(&keyword)
            });
        }

        let mut subject = query.subject;
        if !subject.is_empty() && subject != ALL_SUBJECTS_SENTINEL {
            subject = subject.to_lowercase();
            results.retain(|c| c.subject.to_lowercase().contains(&subject));
        }

        // Intentional asymmetry: exact, case-sensitive, no trimming
        let state = query.state;
        if !state.is_empty() && state != ALL_STATES_SENTINEL {
            results.retain(|c| c.state == state);
        }

        let mut city = query.city;
        if !city.trim().is_empty() {
            city = city.trim().to_lowercase();
            results.retain(|c| c.city.to_lowercase().contains(&city));
        }

        if let Some(ceiling) = query.max_price {
            results.retain(|c| c.price_value() <= ceiling);
        }

        // Stable sorts, so ties keep the pipeline order
        match query.sort_by.as_str() {
            "rating" => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            "price" => results.sort_by_key(|c| c.price_value()),
            "distance" => results.sort_by(|a, b| a.distance_km().total_cmp(&b.distance_km())),
            // Unknown modes keep the pipeline order; not an error
            _ => {}
        }

        let filters = SearchFilters {
            keyword,
            subject,
            state,
            city,
            max_price: query.max_price,
            sort_by: query.sort_by,
        };

        (results, filters)
    }

    /// Appends a user-created record. The write lock spans the max-id scan
    /// and the append. Validation failures leave the collection untouched.
    pub async fn create(&self, dto: CreateCenterDto) -> Result<Center> {
        if !dto.price.starts_with(CURRENCY_PREFIX) {
            return Err(AppError::Validation(format!(
                "Price must start with '{}'",
                CURRENCY_PREFIX
            )));
        }

        let mut centers = self.centers.write().await;
        let id = centers.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let center = Center::from_create(dto, id, Local::now().date_naive());
        centers.push(center.clone());

        tracing::info!("Center created: id={}, name={}", center.id, center.name);

        Ok(center)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
