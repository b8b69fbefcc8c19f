//! Fee voucher download handler

use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use axum::extract::State;
use axum::Extension;
use tower_sessions::Session;
use tracing::{error, info};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::{HostelError, Result};
use crate::utils::flash;

/// GET /voucher (student)
///
/// Serves the fixed fee voucher file as an attachment; when the file is
/// missing the student is sent home with a message instead of a bare 404.
pub async fn download_voucher(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Response> {
    match load_voucher(&state.settings.files.voucher_path).await {
        Ok(bytes) => {
            info!("Student {} downloaded fee voucher", user.username);
            Ok(voucher_response(bytes))
        }
        Err(e @ HostelError::VoucherNotFound) => {
            error!("Fee voucher file not found");
            flash::error(&session, e.user_message()).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => Err(e),
    }
}

/// Read the voucher file, mapping a missing file to its own error
pub(crate) async fn load_voucher(path: &str) -> Result<Vec<u8>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(HostelError::VoucherNotFound),
        Err(e) => Err(e.into()),
    }
}

/// Binary response with attachment headers
pub(crate) fn voucher_response(bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"FeeVoucher.pdf\"",
            ),
        ],
        bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_voucher_reads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 fake voucher").unwrap();

        let bytes = load_voucher(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.4 fake voucher");
    }

    #[tokio::test]
    async fn test_load_voucher_maps_missing_file() {
        let result = load_voucher("static/does_not_exist.pdf").await;
        assert_matches!(result, Err(HostelError::VoucherNotFound));
    }

    #[test]
    fn test_voucher_response_headers() {
        let response = voucher_response(b"pdf".to_vec());
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE.as_str()], "application/pdf");
        assert!(headers[header::CONTENT_DISPOSITION.as_str()]
            .to_str()
            .unwrap()
            .contains("FeeVoucher.pdf"));
    }
}
