mod format;
mod normalize;
mod result;

pub use format::HmsFmt;
pub use normalize::wrap_0_2pi;
pub use result::AngleResult;
