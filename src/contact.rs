use thiserror::Error;

/// All three fields are required; blank (or whitespace-only) input in
/// any of them rejects the whole submission without saying which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("please fill in all required fields")]
pub struct MissingFields;

/// A validated contact submission. Nothing is ever sent anywhere;
/// parsing succeeds or fails purely on the trimmed field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    pub fn parse(name: &str, email: &str, message: &str) -> Result<Self, MissingFields> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(MissingFields);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Status line under the form. Maps one-to-one onto the message text
/// and its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid,
    Accepted,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Invalid => "Please fill in all required fields.",
            FormStatus::Accepted => "Thank you! Your message has been noted.",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FormStatus::Invalid => "form-status error-text",
            FormStatus::Idle | FormStatus::Accepted => "form-status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_complete_submission() {
        let submission = Submission::parse("Ada", "ada@example.com", "Hello there");
        assert_eq!(
            submission,
            Ok(Submission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello there".to_string(),
            })
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let submission = Submission::parse("  Ada ", "\tada@example.com\n", " hi ");
        let submission = submission.unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "hi");
    }

    #[test]
    fn rejects_any_empty_field() {
        assert_eq!(
            Submission::parse("", "ada@example.com", "hi"),
            Err(MissingFields)
        );
        assert_eq!(Submission::parse("Ada", "", "hi"), Err(MissingFields));
        assert_eq!(
            Submission::parse("Ada", "ada@example.com", ""),
            Err(MissingFields)
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(
            Submission::parse("   ", "ada@example.com", "hi"),
            Err(MissingFields)
        );
        assert_eq!(
            Submission::parse("Ada", "ada@example.com", " \n\t "),
            Err(MissingFields)
        );
    }

    #[test]
    fn status_messages() {
        assert_eq!(FormStatus::Idle.message(), "");
        assert_eq!(
            FormStatus::Invalid.message(),
            "Please fill in all required fields."
        );
        assert_eq!(
            FormStatus::Accepted.message(),
            "Thank you! Your message has been noted."
        );
        assert!(FormStatus::Invalid.css_class().contains("error-text"));
        assert!(!FormStatus::Accepted.css_class().contains("error-text"));
    }
}
