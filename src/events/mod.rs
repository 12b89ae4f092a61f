pub mod files;
pub mod pointer;

pub use files::wire_file_sources;
pub use pointer::wire_pointer;
