pub mod features;
pub mod manager;
pub mod sampling;
pub mod traits;

pub use features::FeatureConfig;
pub use manager::{AppConfig, ConfigManager};
pub use sampling::SamplingConfig;
pub use traits::ConfigSection;
