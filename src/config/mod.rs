pub mod settings;

pub use settings::{
    config_path, load_config, load_config_from, AllocatorSettings, PlannerConfig, SummarySettings,
};
