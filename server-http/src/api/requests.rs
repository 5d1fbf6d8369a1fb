use serde::Deserialize;

/// Query parameters of the dispatch endpoint
#[derive(Debug, Deserialize)]
pub struct OperationQuery {
    /// Operation name; absent means "list the available methods"
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// JSON body shared by the create and edit operations. Every field is
/// optional at the wire level; presence is checked per operation.
#[derive(Debug, Default, Deserialize)]
pub struct TicketBody {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
