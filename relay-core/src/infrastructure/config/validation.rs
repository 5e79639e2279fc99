use crate::foundation::Identity;
use crate::infrastructure::config::types::RelayConfig;
use crate::infrastructure::logging::LogFilters;

impl RelayConfig {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match self.relay.owner.as_deref().map(str::trim) {
            None | Some("") => errors.push("relay.owner is required".to_string()),
            Some(raw) => match raw.parse::<Identity>() {
                Ok(owner) if owner.is_null() => errors.push("relay.owner must not be the null identity".to_string()),
                Ok(_) => {}
                Err(err) => errors.push(format!("invalid relay.owner: {}", err)),
            },
        }

        if let Some(path) = self.notifications.log_path.as_ref() {
            if path.trim().is_empty() {
                errors.push("notifications.log_path must not be empty when set".to_string());
            }
        }

        if self.logging.level.trim().is_empty() {
            errors.push("logging.level must not be empty".to_string());
        }
        for directive in LogFilters::invalid_directives(&self.logging.level) {
            errors.push(format!("invalid logging.level directive: {}", directive));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
