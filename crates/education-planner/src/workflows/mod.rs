pub mod discovery;
pub mod planning;
