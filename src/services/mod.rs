pub mod export;
pub mod gemini_client;
pub mod prompting;
