use std::fmt;

#[derive(Debug)]
pub enum GridError {
    Io(std::io::Error),
    Dimensions(String),
    Other(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Io(e) => write!(f, "IO error: {}", e),
            GridError::Dimensions(e) => write!(f, "Dimension error: {}", e),
            GridError::Other(e) => write!(f, "Error: {}", e),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        GridError::Io(err)
    }
}
