// Start of file: /src/config/mod.rs

/*
* Process configuration: environment variables and the state handed to the router.
*/

pub mod environment;
pub mod state;

// End of file: /src/config/mod.rs
