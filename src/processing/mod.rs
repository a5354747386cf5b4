pub mod align;
pub mod equalize;
pub mod grayscale;
pub mod histogram;

pub use align::*;
pub use equalize::*;
pub use grayscale::*;
pub use histogram::*;
