use crate::error::PurError;

pub fn get_exit_code(error: &PurError) -> i32 {
    match error {
        PurError::ValidationError(_) | PurError::ConfigError(_) => 2,

        PurError::NetworkError { .. } => 20,

        _ => 1,
    }
}
