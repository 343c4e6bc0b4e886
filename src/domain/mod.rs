//! Domain Layer
//!
//! Value objects, pure services, and the ports the application layer is
//! generic over. Nothing in here spawns processes or touches the disk.

pub mod ports;
pub mod services;
pub mod value_objects;
