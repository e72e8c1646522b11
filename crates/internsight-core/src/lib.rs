pub mod app_config;
pub mod config;
pub mod error;
pub mod pager;
pub mod profile;
pub mod records;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use pager::{ResultPager, PAGE_SIZE};
pub use profile::{split_locations, ProfileDraft, ProfileField};
pub use records::{format_match_score, CandidateProfile, Recommendation};
