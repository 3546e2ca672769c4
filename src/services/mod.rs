pub mod api_client;
pub mod credential_store;
pub mod token_decoder;
pub mod auth_service;
pub mod nomination_service;
pub mod festival_service;
pub mod ticket_service;
pub mod admin_service;

pub use api_client::{ApiClient, ApiError};
pub use credential_store::{CredentialStore, LocalStorageCredentialStore, MemoryCredentialStore};
pub use token_decoder::{decode, DecodeError};
pub use auth_service::*;
pub use nomination_service::*;
pub use festival_service::*;
pub use ticket_service::*;
pub use admin_service::*;
