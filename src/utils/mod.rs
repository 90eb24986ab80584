pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;
pub mod validate;

pub use formatting::format_money;
