pub mod capture;
pub mod reconstruct;
