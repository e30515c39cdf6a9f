//! Commonly used imports
//!
//! Use `use pullseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{AsyncCursor, AsyncSequence, Cursor, Pull, Sequence, Traversal};

// Containers
pub use crate::{AsyncSeq, Seq};

// Most common constructors
pub use crate::build::{empty, from_fn, from_iter, from_results, from_stream, generate, generate_async};

// Operator configuration
pub use crate::operators::{DistinctOptions, SequenceEqualOptions};

// Errors
pub use crate::{RegistryError, SeqError};

// Registration
pub use crate::{Operator, Registry, pipe};
