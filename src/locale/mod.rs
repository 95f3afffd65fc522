pub mod bundle;
pub mod formatter;

pub use bundle::*;
pub use formatter::*;
