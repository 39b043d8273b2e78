pub mod company;
pub mod stock;
pub mod response;

pub use company::*;
pub use stock::*;
pub use response::*;
