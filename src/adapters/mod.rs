// Adapters layer: concrete implementations for external systems (http, terminal).

pub mod http;
pub mod prompt;
