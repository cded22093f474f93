use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TurnError {
    /// A handler reached a configuration it cannot classify. Only returned
    /// when the caller asked for `ErrorMode::Fail`.
    #[error("unclassified turn for method '{how}' at ({x}, {y})")]
    Unclassified { how: char, x: f64, y: f64 },
    /// A segment window needs 2 or 3 points (or a ring of at least 2).
    #[error("invalid segment window of {0} points")]
    InvalidWindow(usize),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors() {
        let err = TurnError::Unclassified {
            how: 'm',
            x: 1.0,
            y: 2.5,
        };
        assert_eq!(err.to_string(), "unclassified turn for method 'm' at (1, 2.5)");
        assert_eq!(
            TurnError::InvalidWindow(1).to_string(),
            "invalid segment window of 1 points"
        );
    }
}
