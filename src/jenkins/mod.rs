pub mod admin;
pub mod environment;

pub use admin::JenkinsAdmin;
pub use environment::JenkinsEnvironment;
