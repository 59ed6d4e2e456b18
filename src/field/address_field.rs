use crate::field::{FieldError, check_length};
use tracing::{instrument, warn};

/// A free-text address column, shown next to the map widget.
#[derive(Clone, Debug)]
pub struct AddressField {
    blank: bool,
    max_length: usize,
}

impl AddressField {
    pub fn new(max_length: usize) -> Self {
        AddressField { blank: false, max_length }
    }

    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    #[instrument(skip(self))]
    pub fn clean(&self, raw: &str) -> Result<String, FieldError> {
        let result = check_length(raw, self.max_length).and_then(|_| {
            if raw.is_empty() && !self.blank {
                Err(FieldError::Blank)
            } else {
                Ok(raw.to_string())
            }
        });

        if let Err(err) = &result {
            warn!("⚠️ Rejected address: {}", err);
        }
        result
    }
}
