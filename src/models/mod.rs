/// Decode results, guard spans and format tags
pub mod result;
/// Binarized scan line
pub mod row;

pub use result::{BarcodeFormat, GuardSpan, UpcEanResult};
pub use row::RowSignal;
