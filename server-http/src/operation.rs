use axum::http::Method;

/// The operations a request can select through the `method` query
/// parameter. Each name is bound to exactly one HTTP verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    AllTickets,
    TicketById,
    CreateTicket,
    EditTicket,
    EditTicketStatus,
    DeleteTicket,
}

/// Verb-to-operation table, as advertised by the index response.
pub const AVAILABLE_METHODS: [&str; 4] = [
    "GET: allTickets, ticketById",
    "POST: createTicket",
    "PUT: editTicket, editTicketStatus",
    "DELETE: deleteTicket",
];

/// Why a `(verb, method name)` pair selected no operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// Known verb, but the named operation is not bound to it
    InvalidForVerb(Method),
    /// Verb outside GET/POST/PUT/DELETE
    UnsupportedVerb,
}

impl Operation {
    /// Select the operation for a `(HTTP verb, method name)` pair. A
    /// name bound to a different verb is rejected the same way as an
    /// unknown name.
    pub fn select(verb: &Method, name: &str) -> Result<Self, DispatchError> {
        let operation = if *verb == Method::GET {
            match name {
                "allTickets" => Some(Self::AllTickets),
                "ticketById" => Some(Self::TicketById),
                _ => None,
            }
        } else if *verb == Method::POST {
            match name {
                "createTicket" => Some(Self::CreateTicket),
                _ => None,
            }
        } else if *verb == Method::PUT {
            match name {
                "editTicket" => Some(Self::EditTicket),
                "editTicketStatus" => Some(Self::EditTicketStatus),
                _ => None,
            }
        } else if *verb == Method::DELETE {
            match name {
                "deleteTicket" => Some(Self::DeleteTicket),
                _ => None,
            }
        } else {
            return Err(DispatchError::UnsupportedVerb);
        };

        operation.ok_or_else(|| DispatchError::InvalidForVerb(verb.clone()))
    }
}
