use crate::api::requests::TicketBody;
use ticketd::domain::TicketDraft;

/// A required request field was missing or empty. The `Display` output
/// is the exact message returned to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingTicketId,
    MissingCreateFields,
    MissingEditFields,
    MissingStatusFields,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ValidationError::MissingTicketId => "Ticket ID is required.",
            ValidationError::MissingCreateFields => "Name, description, and status are required.",
            ValidationError::MissingEditFields => "ID, name, description, and status are required.",
            ValidationError::MissingStatusFields => "ID and status are required.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

/// Present and non-empty. Empty strings count as missing.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

pub fn require_id(id: Option<&str>) -> Result<&str, ValidationError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ValidationError::MissingTicketId),
    }
}

pub fn create_draft(body: &TicketBody) -> Result<TicketDraft, ValidationError> {
    match (
        present(&body.name),
        present(&body.description),
        present(&body.status),
    ) {
        (Some(name), Some(description), Some(status)) => {
            Ok(TicketDraft::new(name, description, status))
        }
        _ => Err(ValidationError::MissingCreateFields),
    }
}

pub fn edit_request(body: &TicketBody) -> Result<(String, TicketDraft), ValidationError> {
    match (
        present(&body.id),
        present(&body.name),
        present(&body.description),
        present(&body.status),
    ) {
        (Some(id), Some(name), Some(description), Some(status)) => Ok((
            id.to_string(),
            TicketDraft::new(name, description, status),
        )),
        _ => Err(ValidationError::MissingEditFields),
    }
}

pub fn status_edit_request(body: &TicketBody) -> Result<(String, String), ValidationError> {
    match (present(&body.id), present(&body.status)) {
        (Some(id), Some(status)) => Ok((id.to_string(), status.to_string())),
        _ => Err(ValidationError::MissingStatusFields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(
        id: Option<&str>,
        name: Option<&str>,
        description: Option<&str>,
        status: Option<&str>,
    ) -> TicketBody {
        TicketBody {
            id: id.map(String::from),
            name: name.map(String::from),
            description: description.map(String::from),
            status: status.map(String::from),
        }
    }

    #[test]
    fn create_needs_all_three_fields() {
        let ok = create_draft(&body(None, Some("T"), Some("D"), Some("open"))).unwrap();
        assert_eq!(ok.title, "T");

        let err = create_draft(&body(None, Some("T"), None, Some("open"))).unwrap_err();
        assert_eq!(err, ValidationError::MissingCreateFields);
        assert_eq!(
            err.to_string(),
            "Name, description, and status are required."
        );
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let err = create_draft(&body(None, Some(""), Some("D"), Some("open"))).unwrap_err();
        assert_eq!(err, ValidationError::MissingCreateFields);

        let err = require_id(Some("")).unwrap_err();
        assert_eq!(err.to_string(), "Ticket ID is required.");
    }

    #[test]
    fn edit_needs_id_and_all_fields() {
        let (id, draft) =
            edit_request(&body(Some("abc"), Some("T"), Some("D"), Some("open"))).unwrap();
        assert_eq!(id, "abc");
        assert_eq!(draft.status, "open");

        let err = edit_request(&body(None, Some("T"), Some("D"), Some("open"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ID, name, description, and status are required."
        );
    }

    #[test]
    fn status_edit_needs_id_and_status() {
        let (id, status) = status_edit_request(&body(Some("abc"), None, None, Some("resolved")))
            .unwrap();
        assert_eq!((id.as_str(), status.as_str()), ("abc", "resolved"));

        let err = status_edit_request(&body(Some("abc"), None, None, None)).unwrap_err();
        assert_eq!(err.to_string(), "ID and status are required.");
    }
}
