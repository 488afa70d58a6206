pub mod account_dto;
pub mod account_list_response;
pub mod account_response;
pub mod accounts;
pub mod create_account_request;
