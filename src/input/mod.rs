mod reader;

pub use reader::InputSource;
