mod length;
mod linked_list;
mod node;

pub(crate) use length::*;
pub use linked_list::*;
pub use node::*;
