mod descriptor;
mod kernel_matrix;
mod label;
mod ranking;

pub use descriptor::{Descriptor, DescriptorId};
pub use kernel_matrix::KernelMatrix;
pub use label::Label;
pub use ranking::{sort_ranking, Ranking};
