use sitewire_protocol::{DomCommand, Target};
use tracing::info;

use crate::config::ContactConfig;

/// Placeholder submit handler until the form posts to a real endpoint.
#[derive(Debug, Clone)]
pub struct ContactForm {
    acknowledgement: String,
}

impl ContactForm {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            acknowledgement: config.acknowledgement.clone(),
        }
    }

    /// Acknowledge and clear the form. The caller suppresses the browser's
    /// own submission.
    pub fn submit(&self) -> Vec<DomCommand> {
        info!("contact form captured");
        vec![
            DomCommand::Alert {
                message: self.acknowledgement.clone(),
            },
            DomCommand::ResetForm {
                target: Target::ContactForm,
            },
        ]
    }
}
