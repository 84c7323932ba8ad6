mod accessor;
mod pointer;

pub use accessor::SpecificationAccessor;
pub use pointer::SpecificationPointer;
