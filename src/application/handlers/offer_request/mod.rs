//! Offer request command and query handlers.

// Command handlers
mod create_offer_request;
mod generate_description;
mod update_offer_request_status;

// Query handlers
mod get_offer_request;
mod list_offer_requests;

pub use create_offer_request::{
    CreateOfferRequestCommand, CreateOfferRequestHandler, CreateOfferRequestResult,
};
pub use generate_description::{
    GenerateDescriptionCommand, GenerateDescriptionHandler, GenerateDescriptionResult,
};
pub use get_offer_request::{GetOfferRequestHandler, GetOfferRequestQuery};
pub use list_offer_requests::{ListOfferRequestsHandler, ListOfferRequestsQuery};
pub use update_offer_request_status::{
    UpdateOfferRequestStatusCommand, UpdateOfferRequestStatusHandler,
    UpdateOfferRequestStatusResult,
};
