pub mod sample;
pub mod train_config;

pub use sample::Sample;
pub use train_config::TrainConfig;
