mod page_kind;
mod slug;
mod year_month;

pub use page_kind::PageKind;
pub use slug::slugify;
pub use year_month::{YearMonth, YearMonthParseError};
