/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Session token model
pub mod auth;
/// Request building and response decoding
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
