pub mod bump;
pub mod error;
pub mod intent;
pub mod project;
pub mod state;
