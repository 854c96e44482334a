#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid coordinate: longitude {lon}, latitude {lat}")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("Position must have at least 2 values, got {0}")]
    ShortPosition(usize),

    #[error("Linear ring must have at least 4 positions, got {0}")]
    RingTooShort(usize),

    #[error("Linear ring is not closed")]
    RingNotClosed,

    #[error("{0} must contain at least one element")]
    EmptyGeometry(&'static str),
}
