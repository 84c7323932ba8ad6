#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod mock;
pub mod parsing;
pub mod spec;

pub use crate::document::{parse_specification_str, DocumentFormat};
pub use crate::error::{DocumentError, ParsingProblem, ReferenceError, SpecificationError};
pub use crate::mock::{MockResponse, MockResponseCollection};
pub use crate::parsing::{
    ParsingErrorCollector, ParsingErrorHandler, ReferenceResolvingParser, ResponseCollectionParser,
    ResponseParser, SchemaParser,
};
pub use crate::spec::{SpecificationAccessor, SpecificationPointer};
