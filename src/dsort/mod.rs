pub mod alpha;
pub mod buffer;
pub mod compare;
pub mod core;
pub mod error;
pub mod index;


pub use self::alpha::*;
pub use self::buffer::*;
pub use self::compare::*;
pub use self::core::*;
pub use self::error::*;
pub use self::index::*;
