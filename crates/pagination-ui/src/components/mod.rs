pub mod button;
pub mod container;
pub mod form_select;
pub mod pagination;

// Re-exports for convenience
pub use button::*;
pub use container::*;
pub use form_select::*;
pub use pagination::*;
