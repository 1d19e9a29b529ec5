pub mod completions;
pub mod reminder;
pub mod session;
pub mod settings;
pub mod welcome;
