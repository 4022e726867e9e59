use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid coordinates for {name}: start ({start}) must be smaller than end ({end})")]
    InvalidCoordinates { name: String, start: u32, end: u32 },

    #[error("Origin name can't be empty: {0}")]
    EmptyOriginName(String),
}
