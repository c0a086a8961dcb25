//! Domain error model.

use core::fmt::Display;

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, ValidationError>;

/// One or more rule violations found while checking an entity.
///
/// The rendered text is every message joined with `", "` in the order the
/// rules were checked. Callers match on substrings of it, so messages must
/// stay stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .messages.join(", "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// Build an error from a single message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            messages: vec![msg.into()],
        }
    }

    /// Individual violation messages, in check order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether any message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// Accumulates rule violations without stopping at the first one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation; its `Display` output becomes the message.
    pub fn push(&mut self, violation: impl Display) {
        self.messages.push(violation.to_string());
    }

    /// Record `violation` when `failed` is true.
    pub fn check(&mut self, failed: bool, violation: impl Display) {
        if failed {
            self.push(violation);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// `Ok(())` when nothing was recorded, otherwise every message at once.
    pub fn into_result(self) -> DomainResult<()> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                messages: self.messages,
            })
        }
    }
}

impl Extend<String> for Violations {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.messages.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_violations_are_ok() {
        assert_eq!(Violations::new().into_result(), Ok(()));
    }

    #[test]
    fn messages_join_in_insertion_order() {
        let mut v = Violations::new();
        v.push("name is required");
        v.check(false, "skipped");
        v.check(true, "brand is required");
        assert_eq!(v.len(), 2);

        let err = v.into_result().unwrap_err();
        assert_eq!(err.to_string(), "name is required, brand is required");
        assert_eq!(err.messages(), ["name is required", "brand is required"]);
        assert!(err.mentions("brand"));
        assert!(!err.mentions("category"));
    }

    #[test]
    fn single_message_renders_without_separator() {
        let err = ValidationError::new("purchase_price must be 0 or greater");
        assert_eq!(err.to_string(), "purchase_price must be 0 or greater");
        assert_eq!(err.into_messages().len(), 1);
    }
}
