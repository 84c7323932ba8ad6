use crate::error::SpecificationError;
use crate::spec::{SpecificationAccessor, SpecificationPointer};

/// Capability of turning the sub-tree at a pointer into a parsed domain
/// object. Implementations are composed by injection: the reference
/// resolver wraps an inner parser, and orchestrating parsers depend only on
/// this trait, never on a concrete parser type.
pub trait SchemaParser {
    type Output;

    fn parse(
        &self,
        specification: &SpecificationAccessor,
        pointer: &SpecificationPointer,
    ) -> Result<Self::Output, SpecificationError>;
}
