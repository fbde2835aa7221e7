use super::{envelope, json_error_response};
use crate::core::{
    advisory::{debug_message, NotFound},
    usecases,
};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} id {} was not found", .0.entity, .0.id)]
    NotFound(NotFound),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Reports a failed lookup of the given entity as not found.
    pub fn lookup<'a>(
        entity: &'static str,
        id: &'a str,
    ) -> impl FnOnce(usecases::Error) -> Self + 'a {
        move |err| {
            if err.is_not_found() {
                log::debug!("{entity} {id} not found: {err}");
                Self::NotFound(NotFound {
                    entity,
                    id: id.to_owned(),
                    debug: debug_message(err.kind(), &err.cause_message()),
                })
            } else {
                err.into()
            }
        }
    }
}

impl From<usecases::Error> for Error {
    fn from(err: usecases::Error) -> Self {
        Self::Other(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::NotFound(not_found) => {
                let body = envelope::not_found(&not_found);
                Json(body).respond_to(req).map(|mut res| {
                    res.set_status(Status::NotFound);
                    res
                })
            }
            Error::Other(err) => {
                log::error!("Error: {err:#}");
                json_error_response(req, Status::InternalServerError)
            }
        }
    }
}
