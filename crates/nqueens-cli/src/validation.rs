use nqueens_core::SolutionMode;

/// Smallest board the front end accepts
pub const MIN_BOARD_SIZE: i64 = 1;

/// Reasons a requested board size is rejected before solving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TooSmall,
    TooLarge(SolutionMode),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooSmall => write!(
                f,
                "Board size must be greater than or equal to {}.",
                MIN_BOARD_SIZE
            ),
            Self::TooLarge(mode) => {
                let what = match mode {
                    SolutionMode::Single => "single solution",
                    SolutionMode::Unique => "unique solutions",
                    SolutionMode::All => "all solutions",
                };
                write!(
                    f,
                    "Board size for {} must not exceed {}.",
                    what,
                    mode.max_board_size()
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a requested board size against the per-mode limits.
pub fn validate_board_size(size: i64, mode: SolutionMode) -> Result<usize, ValidationError> {
    if size < MIN_BOARD_SIZE {
        return Err(ValidationError::TooSmall);
    }
    let size = usize::try_from(size).map_err(|_| ValidationError::TooLarge(mode))?;
    if size > mode.max_board_size() {
        return Err(ValidationError::TooLarge(mode));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_sizes_within_limits() {
        assert_eq!(validate_board_size(1, SolutionMode::All), Ok(1));
        assert_eq!(validate_board_size(37, SolutionMode::Single), Ok(37));
        assert_eq!(validate_board_size(17, SolutionMode::Unique), Ok(17));
        assert_eq!(validate_board_size(16, SolutionMode::All), Ok(16));
    }

    #[test]
    fn test_rejects_small_sizes() {
        let err = validate_board_size(0, SolutionMode::Unique).unwrap_err();
        assert_eq!(err, ValidationError::TooSmall);
        assert_eq!(
            err.to_string(),
            "Board size must be greater than or equal to 1."
        );
        assert!(validate_board_size(-3, SolutionMode::Single).is_err());
    }

    #[test]
    fn test_messages_name_the_mode() {
        assert_eq!(
            validate_board_size(38, SolutionMode::Single)
                .unwrap_err()
                .to_string(),
            "Board size for single solution must not exceed 37."
        );
        assert_eq!(
            validate_board_size(18, SolutionMode::Unique)
                .unwrap_err()
                .to_string(),
            "Board size for unique solutions must not exceed 17."
        );
        assert_eq!(
            validate_board_size(17, SolutionMode::All)
                .unwrap_err()
                .to_string(),
            "Board size for all solutions must not exceed 16."
        );
    }
}
