pub mod application;
pub mod user;
pub mod validate;

pub use application::{Application, ApplicationUpdate, NewApplication};
pub use user::{NewUser, User, UserUpdate};
