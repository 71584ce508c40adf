pub mod principal;
pub mod authenticated_user;

pub use principal::Principal;
pub use authenticated_user::AuthenticatedUser;
