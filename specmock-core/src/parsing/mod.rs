mod error_handler;
mod reference;
mod response;
mod response_collection;
mod schema_parser;

pub use error_handler::{ParsingErrorCollector, ParsingErrorHandler};
pub use reference::ReferenceResolvingParser;
pub use response::ResponseParser;
pub use response_collection::ResponseCollectionParser;
pub use schema_parser::SchemaParser;
