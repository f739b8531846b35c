//! Types and edit rules shared by the product grid frontend and the backend
//! that serves its records.

pub mod editing;
pub mod model;
