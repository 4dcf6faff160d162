use userportal_api::Error as ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Persistence-layer failure: the cause is logged server-side, the
    /// client only sees `surface`
    #[error("{surface}")]
    Store {
        source: anyhow::Error,
        surface: ApiError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn fetch_failed(source: anyhow::Error) -> Error {
        Error::Store {
            source,
            surface: ApiError::FetchFailed,
        }
    }

    pub fn create_failed(source: anyhow::Error) -> Error {
        Error::Store {
            source,
            surface: ApiError::CreateFailed,
        }
    }

    pub fn invalid_task_id(id: &str) -> Error {
        Error::Api(ApiError::InvalidTaskId(String::from(id)))
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            Error::Store { source, surface } => {
                tracing::error!(err = ?source, "store fault: {surface}");
                surface
            }
            Error::Api(err) => {
                tracing::info!("returning error to client: {err}");
                err
            }
        };
        (err.status_code(), err.contents()).into_response()
    }
}
