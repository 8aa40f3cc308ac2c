use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Bezier evaluation needs 3n+1 control points (n >= 1), got {count}")]
    InvalidBezierControlPointCount { count: usize },

    #[error("B-spline evaluation needs at least 4 control points, got {count}")]
    InvalidBsplineControlPointCount { count: usize },

    #[error("Step count must be at least 1")]
    InvalidStepCount,

    #[error("Degenerate frame at sample {index}")]
    DegenerateFrame { index: usize },

    #[error("Frame at sample {index} is not orthonormal")]
    NonOrthonormalFrame { index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_counts() {
        let err = CurveError::InvalidBezierControlPointCount { count: 5 };
        assert!(err.to_string().contains("got 5"));

        let err = CurveError::InvalidBsplineControlPointCount { count: 3 };
        assert!(err.to_string().contains("got 3"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: CurveError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(matches!(err, CurveError::Io(_)));
        assert!(err.to_string().contains("disk"));
    }
}
