//! Query verification for the search harness.
//!
//! Builds field-scoped boolean query strings with escaping and checks that an
//! index returns exactly the expected document identifiers.
//!
//! ```ignore
//! let mut verifier = QueryVerifier::new(&index).with_page_size(100);
//! verifier.verify_person(&sample, "person50")?;
//! verifier.verify_field(&FieldPath::parse("properties.temperature.unit"), "om:degreeCelsius", "tm1")?;
//! let report = verifier.finish().into_result()?;
//! ```

pub mod args;
pub mod error;
pub mod query;
pub mod report;
pub mod verifier;

pub use args::VerifyArgs;
pub use error::VerifyError;
pub use query::{escape_query_text, FieldPath, QueryBuilder, RESERVED_CHARS};
pub use report::{MismatchInfo, VerificationReport};
pub use verifier::{person_query, QueryVerifier, DEFAULT_PAGE_SIZE};
