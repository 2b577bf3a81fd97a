use cpedict_common::cpe::CpeNameError;
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Database(#[from] DbErr),

    #[error(transparent)]
    CpeName(#[from] CpeNameError),

    #[error("CPE Name missing after insert: {0}")]
    CpeNameNotFound(String),
}
