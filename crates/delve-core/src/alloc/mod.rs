//! Weighted sampling and depth-indexed allocation tables

mod sampler;
mod table;

pub use sampler::{
    SparseTable, Slot, sample_dense, select_dense, select_sparse, select_sparse_at,
};
pub use table::{
    AllocationTable, depth_scale, is_structurally_excluded, kind_is_good, kind_weight,
};
