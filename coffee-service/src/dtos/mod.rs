pub mod acknowledgments;
pub mod coffee;
pub mod user;

pub use acknowledgments::{DeleteAck, InsertAck, UpdateAck};
pub use coffee::{CoffeeResponse, CreateCoffeeRequest, ReplaceCoffeeRequest};
pub use user::{CreateUserRequest, UpdateLastLoginRequest, UserResponse};
