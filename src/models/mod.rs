pub mod crop;
pub mod harvest;
pub mod health;
pub mod reading;
pub mod streak;
pub mod trend;

pub use crop::*;
pub use harvest::*;
pub use health::*;
pub use reading::*;
pub use streak::*;
pub use trend::*;
