pub mod id;
pub mod time;
pub mod validator;
