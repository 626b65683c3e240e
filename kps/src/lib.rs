pub mod config;
pub mod kube;
pub mod prompt;
