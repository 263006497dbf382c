// src/config/consts.rs

// App
pub const APP_TITLE: &str = "MinAlytics - Mining Information & Analytics";

// Local store
pub const DB_FILE: &str = "mining_data.db";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Net config
pub const UPDATES_URL: &str = "https://www.mines.gov.zw/latest-news";
pub const UPDATES_LIMIT: usize = 5;
pub const USER_AGENT: &str = "minalytics/0.1";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Workflow
pub const NEW_USER_ROLE: &str = "Mining Engineer";
pub const NEW_TASK_STATUS: &str = "In Progress";

// Ingest
pub const PRODUCTION_COLUMNS: [&str; 4] = [
    "date", "ore_extracted", "ore_processed", "ore_transported",
];

// Placeholder text
pub const REGULATION_RESPONSE: &str =
    "According to Zimbabwean Mining Act, ... (Example Response)";
pub const ONCOMING_TEXT: &str =
    "This feature will leverage deep learning for geoscientific data analysis. Stay tuned!";
