use crate::{
    data::fallback_api::FallbackApiRepository,
    error::AppError,
    model::server_status::{PlayerEntry, MAX_SESSION_MINUTES},
    test_util::fallback_server,
};
