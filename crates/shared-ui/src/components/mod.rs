// Standalone components
pub mod alert;
pub mod button;
pub mod card;
pub mod input;

// Primitive wrappers
pub mod label;

pub use alert::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
