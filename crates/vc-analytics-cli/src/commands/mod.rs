pub mod company;
pub mod fund;
pub mod pipeline;
pub mod risk;
