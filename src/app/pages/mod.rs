pub mod routes;

pub mod dashboard;
pub mod settings;
pub mod workloads;

pub use dashboard::Dashboard;
pub use settings::Settings;
pub use workloads::Workloads;
