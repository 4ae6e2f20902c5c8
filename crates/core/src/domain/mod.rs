// Domain Layer - Container entities and mutation errors

pub mod error;
pub mod fixed_view;
pub mod growable;
pub mod read_only;

// Re-exports
pub use error::{MutationError, MutationOp};
pub use fixed_view::FixedViewList;
pub use growable::GrowableList;
pub use read_only::ReadOnlyList;

/// Element type held by every container (small integers)
pub type Item = i32;

/// Render a slice the way the demo prints container state: `[0, 1, 2]`
pub(crate) fn fmt_items(f: &mut std::fmt::Formatter<'_>, items: &[Item]) -> std::fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}
