pub mod answer;
pub mod features;
pub mod intake;
pub mod risk;
