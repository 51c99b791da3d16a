/// Error type for health checks
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_error_message() {
        let err = DatabaseError::HealthCheckFailed("pool timed out".to_string());
        assert_eq!(err.to_string(), "Health check failed: pool timed out");
    }
}
