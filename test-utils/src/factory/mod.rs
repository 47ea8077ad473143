//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories that
//! need a parent row (applications, favorites, messages) take the parent id explicitly.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let announcement = factory::create_announcement(&db, "alice").await?;
//! let application = factory::create_application(&db, announcement.id, "bob").await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let rating = factory::avis::AvisFactory::new(&db)
//!     .author("alice")
//!     .recipient("bob")
//!     .note(4)
//!     .build()
//!     .await?;
//! ```

pub mod announcement;
pub mod application;
pub mod avis;
pub mod discussion;
pub mod favorite;
pub mod helpers;
pub mod message;
pub mod user;

pub use announcement::create_announcement;
pub use application::create_application;
pub use avis::create_avis;
pub use discussion::create_discussion;
pub use favorite::create_favorite;
pub use message::create_message;
pub use user::create_user;
