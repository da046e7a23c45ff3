pub mod creation;
pub mod viewing;
