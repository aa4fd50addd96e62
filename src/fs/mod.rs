//! Filesystem naming module.
//!
//! Provides:
//! - Path classification and directory preparation
//! - Disambiguation suffix normalization and name validation
//! - Collision-free destination names

pub mod naming;
pub mod paths;
pub mod unique;

pub use naming::{
    first_illegal_char, format_candidate, rename_path, unsuffix, NameValidator, RESERVED_CHARS,
};
pub use paths::{classify, create_directories, ensure_parent_dirs, PathClass};
pub use unique::{
    canonical_path, first_unused, CollisionResolver, ExistenceCheck, Filesystem,
    DEFAULT_MAX_ATTEMPTS,
};
