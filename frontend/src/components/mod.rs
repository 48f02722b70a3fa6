pub mod guard;
pub mod icons;
pub mod layout;
