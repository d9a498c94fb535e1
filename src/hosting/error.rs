use crate::gameplay::Illegal;
use crate::gameroom::Failure;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

impl ResponseError for Failure {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Illegal(Illegal::InvalidTurn) => StatusCode::FORBIDDEN,
            Self::Illegal(Illegal::AlreadyActed) => StatusCode::CONFLICT,
            Self::Illegal(Illegal::ChoicePending) => StatusCode::CONFLICT,
            Self::Illegal(Illegal::NoPendingChoice) => StatusCode::CONFLICT,
            Self::Illegal(Illegal::UnknownCard) => StatusCode::NOT_FOUND,
            Self::Illegal(Illegal::UnknownPlayer) => StatusCode::NOT_FOUND,
            Self::Illegal(Illegal::SessionClosed) => StatusCode::LOCKED,
            Self::Missing => StatusCode::NOT_FOUND,
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Corrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "ok": false,
            "error": self.kind(),
            "detail": self.to_string(),
        }))
    }
}
