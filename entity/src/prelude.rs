pub use super::announcement::Entity as Announcement;
pub use super::application::Entity as Application;
pub use super::avis::Entity as Avis;
pub use super::discussion::Entity as Discussion;
pub use super::favorite::Entity as Favorite;
pub use super::message::Entity as Message;
pub use super::user::Entity as User;
