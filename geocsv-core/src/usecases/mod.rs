mod format_address;
mod geocode_record;

pub use self::{format_address::*, geocode_record::*};
