// Selectors, classes and ids shared by the landing page markup and the DOM
// bindings that attach to it.

pub const OVERLAY_CARD_SELECTOR: &str = "[data-flip]";
pub const LITE_CARD_SELECTOR: &str = "[data-flip-lite]";
pub const FRONT_SELECTOR: &str = "[data-flip-front]";
pub const EXPAND_SELECTOR: &str = ".poster-plus";
pub const CLOSE_SELECTOR: &str = ".poster-close";
pub const BACK_SELECTOR: &str = ".flip-back";
pub const NO_CLOSE_SELECTOR: &str = ".no-close";
pub const OVERLAY_SELECTOR: &str = ".flip-overlay";

pub const OVERLAY_CLASS: &str = "flip-overlay";
pub const OPEN_CLASS: &str = "is-open";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const LOCKED_CLASS: &str = "is-locked";

pub const HERO_BG_SELECTOR: &str = ".hero__bg";

pub const RANGE_REVIEWS_ID: &str = "range_reviews";
pub const RANGE_MINUTES_ID: &str = "range_min";
pub const RANGE_RATE_ID: &str = "range_rate";
pub const OUT_REVIEWS_ID: &str = "out_reviews";
pub const OUT_MINUTES_ID: &str = "out_min";
pub const OUT_RATE_ID: &str = "out_rate";
pub const KPI_MONEY_ID: &str = "kpi_money";
pub const KPI_TIME_ID: &str = "kpi_time";
