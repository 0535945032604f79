pub mod bump;

pub use bump::run_bump;
