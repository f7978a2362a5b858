#[derive(Debug)]
pub enum LogError {
    IoError(std::io::Error),
    NotInitialized,
    Poisoned,
}

impl core::fmt::Display for LogError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IoError(_) => write!(f, "IO error"),
            Self::NotInitialized => write!(f, "logger not initialized"),
            Self::Poisoned => write!(f, "logger lock poisoned"),
        }
    }
}

impl core::error::Error for LogError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::NotInitialized | Self::Poisoned => None,
        }
    }
}

impl From<std::io::Error> for LogError {

    fn from(value: std::io::Error) -> Self {
        Self::IoError(value)
    }
}
