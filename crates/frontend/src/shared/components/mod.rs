pub mod card;
pub mod page_header;
pub mod table;
pub mod ui;

pub use card::Card;
pub use page_header::PageHeader;
