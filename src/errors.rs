use actix_web::HttpResponse;
use derive_more::Display;

#[derive(Debug, Display)]
pub enum ServerError {
    #[display(fmt = "memo content must not be empty")]
    EmptyContent,
    #[display(fmt = "memo id must be an integer")]
    InvalidMemoId,
    #[display(fmt = "database query failed")]
    DieselError,
    #[display(fmt = "no database connection available")]
    PoolError,
    #[display(fmt = "database setup failed")]
    MigrationError,
    #[display(fmt = "page rendering failed")]
    TemplateError,
}

impl From<r2d2::Error> for ServerError {
    fn from(_: r2d2::Error) -> ServerError {
        ServerError::PoolError
    }
}

impl From<diesel::result::Error> for ServerError {
    fn from(_: diesel::result::Error) -> ServerError {
        ServerError::DieselError
    }
}

impl From<tera::Error> for ServerError {
    fn from(_: tera::Error) -> ServerError {
        ServerError::TemplateError
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServerError::EmptyContent => {
                HttpResponse::BadRequest().body("memo content must not be empty")
            }
            ServerError::InvalidMemoId => {
                HttpResponse::BadRequest().body("memo id must be an integer")
            }
            ServerError::DieselError => {
                HttpResponse::InternalServerError().body("Storage Error: query failed.")
            }
            ServerError::PoolError => {
                HttpResponse::InternalServerError().body("Storage Error: pooling error.")
            }
            ServerError::MigrationError => {
                HttpResponse::InternalServerError().body("Storage Error: database setup failed.")
            }
            ServerError::TemplateError => {
                HttpResponse::InternalServerError().body("Render Error: template failed.")
            }
        }
    }
}
