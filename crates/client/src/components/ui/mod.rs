//! UI primitives (Button, Modal, SearchInput)

pub mod button;
pub mod input;
pub mod modal;

pub use button::*;
pub use input::*;
pub use modal::*;
