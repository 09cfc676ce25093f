/// Currency prefix every price string must carry
pub const CURRENCY_PREFIX: &str = "RM";

/// Currency label echoed in list/search payloads
pub const CURRENCY_LABEL: &str = "RM";

/// Country label for the discovery and listing payloads
pub const COUNTRY_LABEL: &str = "Malaysia";

/// Service name used in health and discovery payloads
pub const SERVICE_NAME: &str = "T4U Malaysia";

/// Sentinel price for strings with no digits; excluded by any realistic ceiling
pub const PRICE_UNPARSEABLE: i64 = 999;

/// Rating assigned to every user-created center
pub const DEFAULT_RATING: f64 = 4.0;

/// Default grade range when the create request omits one
pub const DEFAULT_GRADE: &str = "Tingkatan 1-5";

/// Default operating hours when the create request omits them
pub const DEFAULT_OPERATING_HOURS: &str = "Mon-Fri: 4pm-9pm";

// =============================================================================
// REFERENCE LISTS
// =============================================================================

/// "No filter" sentinel for the state filter (first entry of [`MALAYSIA_STATES`])
pub const ALL_STATES_SENTINEL: &str = "全部地区";

/// "No filter" sentinel for the subject filter (first entry of [`MALAYSIA_SUBJECTS`])
pub const ALL_SUBJECTS_SENTINEL: &str = "全部科目";

/// Malaysian states, sentinel first, returned verbatim by `/api/states`
pub const MALAYSIA_STATES: &[&str] = &[
    ALL_STATES_SENTINEL,
    "吉隆坡",
    "雪兰莪",
    "槟城",
    "柔佛",
    "霹雳",
    "马六甲",
    "森美兰",
    "彭亨",
    "登嘉楼",
    "吉兰丹",
    "砂拉越",
    "沙巴",
    "玻璃市",
    "吉打",
];

/// Malaysian school subjects, sentinel first, returned verbatim by `/api/subjects`
pub const MALAYSIA_SUBJECTS: &[&str] = &[
    ALL_SUBJECTS_SENTINEL,
    "数学",
    "高级数学",
    "科学",
    "物理",
    "化学",
    "生物",
    "英文",
    "华文",
    "马来文",
    "历史",
    "地理",
    "会计",
    "经济",
    "商业",
    "道德教育",
    "全科",
    "电脑科学",
    "其他",
];
