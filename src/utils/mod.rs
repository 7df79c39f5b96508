// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting helpers: global error mapping for tower layers and the
    * JSON message body used by non-hello responses.
*/

pub mod error_handler;
pub mod response;

// End of file: /src/utils/mod.rs
