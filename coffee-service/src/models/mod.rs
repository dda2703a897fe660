pub mod coffee;
pub mod user;

pub use coffee::Coffee;
pub use user::User;
