mod file_type;

pub use file_type::{FileType, recognized_extensions};
