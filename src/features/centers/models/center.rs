use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::centers::dtos::CreateCenterDto;
use crate::shared::constants::{DEFAULT_RATING, PRICE_UNPARSEABLE};
use crate::shared::validation::DIGIT_RUN_REGEX;

/// One tuition center listing.
///
/// `price` and `distance` are display strings with an embedded numeric value
/// ("RM50/jam", "1.2km"); the numeric side is derived on demand via
/// [`Center::price_value`] and [`Center::distance_km`]. Records are never
/// mutated or deleted once inserted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Center {
    pub id: i64,
    pub name: String,
    /// Primary subject label; the search subject filter matches this field only
    pub subject: String,
    pub grade: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Display price, always prefixed with "RM"
    pub price: String,
    pub rating: f64,
    /// Display distance of the form "<number>km"
    pub distance: String,
    /// Secondary subject tags
    pub subjects: Vec<String>,
    pub phone: String,
    pub description: String,
    pub operating_hours: String,
    /// Date-only, YYYY-MM-DD
    pub created_at: String,
    /// False for seed data, true for records appended at runtime
    pub added_by_user: bool,
}

impl Center {
    /// Numeric price extracted from the display string: the first run of
    /// decimal digits, or [`PRICE_UNPARSEABLE`] when the string has none so
    /// that any realistic price ceiling excludes the record instead of
    /// erroring.
    pub fn price_value(&self) -> i64 {
        DIGIT_RUN_REGEX
            .find(&self.price)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(PRICE_UNPARSEABLE)
    }

    /// Numeric distance: the display string with the "km" suffix stripped.
    /// Unparseable strings sort last under the ascending distance sort.
    pub fn distance_km(&self) -> f64 {
        self.distance
            .trim_end_matches("km")
            .parse()
            .unwrap_or(f64::MAX)
    }

    /// Builds a user-created record from validated input plus the two
    /// catalog-owned dependencies: the assigned id and today's date.
    ///
    /// Synthesized fields: rating 4.0, a deterministic placeholder distance of
    /// `(id % 10) + 0.5` km, subjects = [primary subject], added_by_user.
    pub fn from_create(dto: CreateCenterDto, id: i64, today: NaiveDate) -> Self {
        let subjects = vec![dto.subject.clone()];

        Self {
            id,
            name: dto.name,
            subject: dto.subject,
            grade: dto.grade,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            price: dto.price,
            rating: DEFAULT_RATING,
            distance: format!("{:.1}km", (id % 10) as f64 + 0.5),
            subjects,
            phone: dto.phone,
            description: dto.description,
            operating_hours: dto.operating_hours,
            created_at: today.format("%Y-%m-%d").to_string(),
            added_by_user: true,
        }
    }
}

/// The fixed Malaysian seed dataset, loaded once at startup.
pub fn seed_centers() -> Vec<Center> {
    vec![
        Center {
            id: 1,
            name: "精英数学补习中心".to_string(),
            subject: "数学".to_string(),
            grade: "Tingkatan 1-5".to_string(),
            address: "No. 123, Jalan Bukit Bintang".to_string(),
            city: "吉隆坡".to_string(),
            state: "WP Kuala Lumpur".to_string(),
            price: "RM50/jam".to_string(),
            rating: 4.7,
            distance: "1.2km".to_string(),
            subjects: vec!["数学".to_string(), "高级数学".to_string()],
            phone: "03-1234 5678".to_string(),
            description: "专攻SPM数学，小班教学，经验丰富老师".to_string(),
            operating_hours: "Mon-Fri: 4pm-9pm, Sat-Sun: 9am-6pm".to_string(),
            created_at: "2024-01-01".to_string(),
            added_by_user: false,
        },
        Center {
            id: 2,
            name: "牛顿物理补习社".to_string(),
            subject: "物理".to_string(),
            grade: "Tingkatan 4-5".to_string(),
            address: "45-2, Jalan SS2/24, Petaling Jaya".to_string(),
            city: "八打灵再也".to_string(),
            state: "雪兰莪".to_string(),
            price: "RM55/jam".to_string(),
            rating: 4.5,
            distance: "2.5km".to_string(),
            subjects: vec!["物理".to_string(), "数学".to_string()],
            phone: "03-8765 4321".to_string(),
            description: "物理实验与理论结合，SPM历年考题分析".to_string(),
            operating_hours: "Mon-Sat: 3pm-8pm".to_string(),
            created_at: "2024-01-01".to_string(),
            added_by_user: false,
        },
        Center {
            id: 3,
            name: "化学实验室补习中心".to_string(),
            subject: "化学".to_string(),
            grade: "Tingkatan 3-5".to_string(),
            address: "78, Jalan Tan Sri Teh Ewe Lim".to_string(),
            city: "怡保".to_string(),
            state: "霹雳".to_string(),
            price: "RM60/jam".to_string(),
            rating: 4.8,
            distance: "3.8km".to_string(),
            subjects: vec!["化学".to_string(), "生物".to_string()],
            phone: "05-2345 6789".to_string(),
            description: "化学方程式教学，实验安全指导".to_string(),
            operating_hours: "Mon-Fri: 2pm-7pm, Sat: 9am-1pm".to_string(),
            created_at: "2024-01-01".to_string(),
            added_by_user: false,
        },
        Center {
            id: 4,
            name: "英语大师补习学院".to_string(),
            subject: "英文".to_string(),
            grade: "Standard 1-Tingkatan 5".to_string(),
            address: "12-1, Jalan Tun Razak".to_string(),
            city: "新山".to_string(),
            state: "柔佛".to_string(),
            price: "RM65/jam".to_string(),
            rating: 4.6,
            distance: "0.8km".to_string(),
            subjects: vec!["英文".to_string(), "英国文学".to_string()],
            phone: "07-3456 7890".to_string(),
            description: "英语会话与写作，SPM作文技巧".to_string(),
            operating_hours: "Everyday: 10am-8pm".to_string(),
            created_at: "2024-01-01".to_string(),
            added_by_user: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::centers::dtos::CreateCenterDto;

    fn sample_dto() -> CreateCenterDto {
        CreateCenterDto {
            name: "新补习中心".to_string(),
            subject: "数学".to_string(),
            grade: "Tingkatan 1-5".to_string(),
            address: "1, Jalan Test".to_string(),
            city: "吉隆坡".to_string(),
            state: "吉隆坡".to_string(),
            price: "RM45/jam".to_string(),
            description: String::new(),
            phone: String::new(),
            operating_hours: "Mon-Fri: 4pm-9pm".to_string(),
        }
    }

    #[test]
    fn test_price_value_extracts_first_digit_run() {
        let mut center = seed_centers().remove(0);
        assert_eq!(center.price_value(), 50);

        center.price = "RM120 per 4 weeks".to_string();
        assert_eq!(center.price_value(), 120);
    }

    #[test]
    fn test_price_value_sentinel_when_no_digits() {
        let mut center = seed_centers().remove(0);
        center.price = "RM negotiable".to_string();
        assert_eq!(center.price_value(), PRICE_UNPARSEABLE);
    }

    #[test]
    fn test_distance_km_strips_suffix() {
        let center = seed_centers().remove(1);
        assert_eq!(center.distance_km(), 2.5);
    }

    #[test]
    fn test_from_create_synthesizes_derived_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let center = Center::from_create(sample_dto(), 5, date);

        assert_eq!(center.id, 5);
        assert_eq!(center.rating, 4.0);
        assert_eq!(center.distance, "5.5km");
        assert_eq!(center.subjects, vec!["数学".to_string()]);
        assert_eq!(center.created_at, "2024-06-01");
        assert!(center.added_by_user);
    }

    #[test]
    fn test_from_create_distance_wraps_at_ten() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let center = Center::from_create(sample_dto(), 12, date);
        assert_eq!(center.distance, "2.5km");
    }
}
