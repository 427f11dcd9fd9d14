//! Business logic services.
//!
//! Services hold the SQL for each entity and the existence checks that guard
//! writes. Handlers stay thin and only translate HTTP in and out.

pub mod key_copy_service;
pub mod key_service;
pub mod references;
pub mod staff_service;
