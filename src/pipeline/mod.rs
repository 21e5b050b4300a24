pub mod classifiers;
pub mod dictionaries;
pub mod features;
pub mod normalizers;
pub mod notes;
pub mod preprocessor;
