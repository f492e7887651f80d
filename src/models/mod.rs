pub mod chat;
pub mod insights;
pub mod ordered;
pub mod product;
pub mod ranking;
pub mod report;
pub mod system;

pub use chat::*;
pub use insights::*;
pub use ordered::*;
pub use product::*;
pub use ranking::*;
pub use report::*;
pub use system::*;
