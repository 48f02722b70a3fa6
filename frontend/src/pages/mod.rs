pub mod admin;
pub mod advisories;
pub mod login;

pub use admin::{AdminIndex, CreateAdvisoryPage};
pub use advisories::AdvisoriesPage;
pub use login::LoginPage;
