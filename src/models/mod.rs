pub mod invitation;
pub mod template;
