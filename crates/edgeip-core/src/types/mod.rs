mod dns;
mod record;
mod site;

pub use dns::*;
pub use record::*;
pub use site::*;
