pub mod a001_chemical;
pub mod a002_sample_chemical;
