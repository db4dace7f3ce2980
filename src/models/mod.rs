//! WestFax API model types.

mod call_info;
mod fax;
mod file;

pub use call_info::*;
pub use fax::*;
pub use file::*;
