//! # Quill Shared
//!
//! Wire types shared by the server and anything that talks to it.
//! The integration tests deserialize responses into these same types.

pub mod dto;
pub mod response;

pub use dto::{AuthorPayload, CreatePostRequest, PostView, UpdatePostRequest};
pub use response::ErrorResponse;
