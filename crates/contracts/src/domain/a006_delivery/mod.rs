pub mod aggregate;

pub use aggregate::{
    mock_deliveries, DeliveryAreas, DeliveryBatch, DeliveryStatus, COORDINATORS, DEFAULT_AREAS,
};
