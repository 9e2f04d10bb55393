//! 领域模型

mod enums;
mod restriction_hour;

pub use enums::DayOfWeek;
pub use restriction_hour::{
    NewRestrictionHour, RawKey, RestrictionHour, RestrictionHourInput, RestrictionHourKey,
};
