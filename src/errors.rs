use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    BadPolarity(String),
    EmptyHeap,
    IndexOutOfRange(usize, usize),
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::BadPolarity(name) => {
                write!(
                    f,
                    "Unknown heap polarity '{}' - expected 'min' or 'max'",
                    name
                )
            }
            HeapError::EmptyHeap => {
                write!(f, "Cannot extract from an empty heap")
            }
            HeapError::IndexOutOfRange(index, len) => {
                write!(
                    f,
                    "Index out of range - index was {}, heap length is {}",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            HeapError::IndexOutOfRange(7, 3).to_string(),
            "Index out of range - index was 7, heap length is 3"
        );
        assert_eq!(
            HeapError::EmptyHeap.to_string(),
            "Cannot extract from an empty heap"
        );
    }
}
