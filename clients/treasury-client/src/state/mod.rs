pub mod settings;
pub mod simple_treasury;
pub mod vested_treasury;
pub mod community;

pub use settings::*;
pub use simple_treasury::*;
pub use vested_treasury::*;
pub use community::*;
