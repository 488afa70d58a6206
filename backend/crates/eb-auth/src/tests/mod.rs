mod claims;
mod raw_token;
