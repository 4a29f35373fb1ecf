mod parser;
mod report;
mod types;

pub use parser::{parse_nsf_header, read_nsf_header};
pub use report::format_header_report;
pub use types::{NsfError, NsfHeader, Region, NSF_HEADER_LEN, NSF_MAGIC};
