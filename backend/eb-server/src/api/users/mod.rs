pub mod identity_dto;
pub mod login_request;
pub mod register_request;
pub mod register_response;
pub mod set_password_request;
pub mod user_response;
pub mod users;
pub mod verify_email_request;
pub mod verify_email_response;
