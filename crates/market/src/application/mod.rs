mod economy;
mod order_book;
mod settlement;

pub use economy::Economy;
pub use order_book::{build_demands, build_offers};
pub use settlement::{SettlementSummary, settle};
