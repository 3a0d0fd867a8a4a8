pub mod opt;
pub mod either;

pub mod must;
pub mod lookup;
