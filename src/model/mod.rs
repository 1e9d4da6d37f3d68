pub mod bands;
pub mod responses;
pub mod reversal;
pub mod score;
