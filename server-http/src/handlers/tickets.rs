use crate::api::requests::{OperationQuery, TicketBody};
use crate::api::responses::{
    AvailableMethodsResponse, ErrorResponse, InvalidHttpMethodResponse, TicketDeletedResponse,
};
use crate::operation::{DispatchError, Operation};
use crate::state::AppState;
use crate::validation::{self, ValidationError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::Error;
use tracing::info;

/// Dispatch entry point for every ticket operation. The target
/// operation is selected from the HTTP verb and the `method` query
/// parameter; a request without a `method` parameter gets the index of
/// available methods instead.
pub async fn dispatch(
    State(state): State<AppState>,
    verb: Method,
    Query(query): Query<OperationQuery>,
    body: Result<Json<TicketBody>, JsonRejection>,
) -> Response {
    let Some(name) = query.method.as_deref() else {
        return Json(AvailableMethodsResponse::new()).into_response();
    };

    let operation = match Operation::select(&verb, name) {
        Ok(operation) => operation,
        Err(error) => return dispatch_error(error),
    };

    // A missing or malformed body dispatches with every field absent;
    // presence validation then reports the contractual message.
    let body = body.map(|Json(body)| body).unwrap_or_default();

    match operation {
        Operation::AllTickets => all_tickets(&state).await,
        Operation::TicketById => ticket_by_id(&state, query.id.as_deref()).await,
        Operation::CreateTicket => create_ticket(&state, &body).await,
        Operation::EditTicket => edit_ticket(&state, &body).await,
        Operation::EditTicketStatus => edit_ticket_status(&state, &body).await,
        Operation::DeleteTicket => delete_ticket(&state, query.id.as_deref()).await,
    }
}

/// GET ?method=allTickets
async fn all_tickets(state: &AppState) -> Response {
    info!("ALL_TICKETS");

    match state.tickets.list_tickets().await {
        Ok(summaries) => Json(summaries).into_response(),
        Err(error) => store_error(error),
    }
}

/// GET ?method=ticketById&id=<id>
async fn ticket_by_id(state: &AppState, id: Option<&str>) -> Response {
    let id = match validation::require_id(id) {
        Ok(id) => id,
        Err(error) => return validation_error(error),
    };

    info!("TICKET_BY_ID: id={}", id);

    match state.tickets.ticket_by_id(id).await {
        Ok(ticket) => Json(ticket).into_response(),
        Err(error) => store_error(error),
    }
}

/// POST ?method=createTicket, body {name, description, status}
async fn create_ticket(state: &AppState, body: &TicketBody) -> Response {
    let draft = match validation::create_draft(body) {
        Ok(draft) => draft,
        Err(error) => return validation_error(error),
    };

    info!("CREATE_TICKET: title={}", draft.title);

    match state.tickets.create_ticket(draft).await {
        Ok(ticket) => Json(ticket).into_response(),
        Err(error) => store_error(error),
    }
}

/// PUT ?method=editTicket, body {id, name, description, status}
async fn edit_ticket(state: &AppState, body: &TicketBody) -> Response {
    let (id, draft) = match validation::edit_request(body) {
        Ok(request) => request,
        Err(error) => return validation_error(error),
    };

    info!("EDIT_TICKET: id={}", id);

    match state.tickets.edit_ticket(&id, draft).await {
        Ok(ticket) => Json(ticket).into_response(),
        Err(error) => store_error(error),
    }
}

/// PUT ?method=editTicketStatus, body {id, status}
async fn edit_ticket_status(state: &AppState, body: &TicketBody) -> Response {
    let (id, status) = match validation::status_edit_request(body) {
        Ok(request) => request,
        Err(error) => return validation_error(error),
    };

    info!("EDIT_TICKET_STATUS: id={}, status={}", id, status);

    match state.tickets.edit_ticket_status(&id, status).await {
        Ok(ticket) => Json(ticket).into_response(),
        Err(error) => store_error(error),
    }
}

/// DELETE ?method=deleteTicket&id=<id>
async fn delete_ticket(state: &AppState, id: Option<&str>) -> Response {
    let id = match validation::require_id(id) {
        Ok(id) => id,
        Err(error) => return validation_error(error),
    };

    info!("DELETE_TICKET: id={}", id);

    match state.tickets.delete_ticket(id).await {
        Ok(()) => Json(TicketDeletedResponse::new()).into_response(),
        Err(error) => store_error(error),
    }
}

fn validation_error(error: ValidationError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(error.to_string())),
    )
        .into_response()
}

fn store_error(error: Error) -> Response {
    match error {
        Error::TicketNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(error.to_string())),
        )
            .into_response(),
        Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

fn dispatch_error(error: DispatchError) -> Response {
    match error {
        DispatchError::InvalidForVerb(verb) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!(
                "Invalid method for {verb} request."
            ))),
        )
            .into_response(),
        DispatchError::UnsupportedVerb => (
            StatusCode::BAD_REQUEST,
            Json(InvalidHttpMethodResponse::new()),
        )
            .into_response(),
    }
}
