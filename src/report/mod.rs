pub mod composite;
pub mod draw;
pub mod text;

pub use composite::*;
pub use draw::*;
pub use text::*;
