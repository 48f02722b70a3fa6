mod auth;
pub mod client;
mod events;
mod records;
pub mod types;

#[cfg(test)]
pub use auth::SESSION_STORAGE_KEY;
pub use client::*;
#[cfg(test)]
pub use events::AuthSubscription;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
