// Adapters layer: concrete implementations for external systems (completion API, HTTP boundary).

pub mod groq;
pub mod http;
