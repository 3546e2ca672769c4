pub mod auth;
pub mod decimal;
pub mod identity;
pub mod festival;
pub mod nomination;
pub mod report;
pub mod ticket;
pub mod ticket_type;
pub mod user;

pub use auth::{ApiErrorBody, ChangePasswordRequest, LoginRequest, LoginResponse};
pub use identity::{Identity, Role, TokenClaims};
pub use festival::{Festival, FestivalPayload, FestivalStatus};
pub use nomination::{NominationRequest, PublicTicket, TicketState};
pub use report::{Attendee, Purchase};
pub use ticket::{AssociateBraceletRequest, Bracelet, FestivalTicket, TicketStatus};
pub use ticket_type::{TicketType, TicketTypePayload};
pub use user::{StatusChangeRequest, User};
