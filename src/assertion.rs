//! Assertion-style entry points: compare, and on mismatch surface the diff
//! as an error message.

use thiserror::Error;

use crate::compare::{compare_with_options, CompareOptions};
use crate::diff::{diff_with_options, DiffReport};
use crate::parser::{parse_str, ParseError};
use crate::tree::XmlNode;

/// Failure raised by the assertion entry points.
#[derive(Debug, Error)]
pub enum AssertionError {
    /// One of the inputs failed to parse; propagated unmodified.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The trees are not equivalent; the message is the annotated diff.
    #[error("XML documents differ:\n{0}")]
    Mismatch(DiffReport),
}

/// Check two trees for equivalence, returning the annotated diff on mismatch.
pub fn assert_equal(x: &XmlNode, y: &XmlNode, opts: &CompareOptions) -> Result<(), AssertionError> {
    if compare_with_options(x, y, opts) {
        return Ok(());
    }
    Err(AssertionError::Mismatch(diff_with_options(x, y, opts)))
}

/// Parse two documents and check them for equivalence.
pub fn assert_equal_str(x: &str, y: &str, opts: &CompareOptions) -> Result<(), AssertionError> {
    let x = parse_str(x)?;
    let y = parse_str(y)?;
    assert_equal(&x, &y, opts)
}
