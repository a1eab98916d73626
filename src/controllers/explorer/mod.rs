pub mod controller;
pub mod gestures;
pub mod ports;
