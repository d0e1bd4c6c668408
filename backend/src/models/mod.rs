pub mod events;
pub mod observer;
pub mod time;

pub use events::*;
pub use observer::*;
pub use time::*;
