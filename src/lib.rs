mod set;
pub use set::*;

pub mod order;
pub use order::{NaturalOrder, OrderBy, SortOrder};

// core sorted vec impl
pub mod vec;
pub use vec::{IntoIter, Iter, SortedVec, Store, VecStore};
