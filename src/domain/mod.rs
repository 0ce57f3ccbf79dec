// Domain layer: catalog data, canonical records and the transport port. No I/O here.

pub mod catalog;
pub mod model;
pub mod ports;
