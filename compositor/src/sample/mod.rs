mod sampling_method;
mod sampler;

pub use sampling_method::*;
pub use sampler::*;
