//! # Registration Service Module
//!
//! Receives registrations posted by the frontend's submission sink. The form
//! has already validated them; this service only acknowledges and logs.
//!
//! ## Sub-modules:
//! - `receive`: Decodes a `Registration` payload and answers with a receipt.

mod receive;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for all registration endpoints.
const API_PATH: &str = "/api/registrations";

/// Configures and returns the Actix `Scope` for registration routes.
///
/// # Registered Routes:
///
/// *   **`POST /api/registrations`**:
///     - **Handler**: `receive::process`
///     - **Description**: Accepts a JSON `Registration` (field values plus the
///       profile picture as base64) and returns `201 Created` with a
///       `RegistrationReceipt`. A body that is not a `Registration`, or whose
///       photo is not valid base64, is answered with `400 Bad Request`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(receive::process))
}
