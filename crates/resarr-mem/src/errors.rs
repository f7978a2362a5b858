#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrayError {
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
}

impl core::fmt::Display for ArrayError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} was out of bounds of len {}", index, len)
            },
        }
    }
}

impl core::error::Error for ArrayError {}
