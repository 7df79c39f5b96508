// Start of file: /src/api/mod.rs

/*
    * HTTP surface of the service. Each sub-module owns its routes and handlers.
*/

pub mod fallback;
pub mod hello;

// End of file: /src/api/mod.rs
