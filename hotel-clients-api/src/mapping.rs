//! Response mapping
//!
//! Turns a `(status, body)` pair into the operation's [`Reply`] or an
//! [`ApiError`]. Kept free of any transport so every branch is unit-testable.

use crate::error::{ApiError, ApiResult};
use crate::http_client::HttpUtils;
use crate::types::{Operation, Reply, SearchEnvelope};

const CREATED: u16 = 201;
const OK: u16 = 200;
const NOT_FOUND: u16 = 404;

/// Map a response according to the operation that produced it.
pub fn map_response(operation: &Operation, status: u16, body: String) -> ApiResult<Reply> {
    match operation {
        Operation::Create(_) => map_create(status, body),
        Operation::Search(_) => map_search(status, body),
        Operation::Update(_) => map_update(status, body),
        Operation::Delete(_) => map_delete(status, body),
    }
}

/// `POST /add` succeeds only with 201.
pub fn map_create(status: u16, body: String) -> ApiResult<Reply> {
    expect_status(status, CREATED, body).map(|()| Reply::Created)
}

/// `GET /search`: 404 is "no match", 200 carries `{data: Client | null}`.
pub fn map_search(status: u16, body: String) -> ApiResult<Reply> {
    match status {
        NOT_FOUND => {
            log::debug!("search: no client matched (404)");
            Ok(Reply::Found(None))
        }
        OK => {
            let envelope: SearchEnvelope = HttpUtils::parse_json(&body)?;
            if envelope.data.is_none() {
                log::debug!("search: 200 with null data");
            }
            Ok(Reply::Found(envelope.data))
        }
        _ => Err(ApiError::UnexpectedStatus { status, body }),
    }
}

/// `PUT /update` succeeds only with 200.
pub fn map_update(status: u16, body: String) -> ApiResult<Reply> {
    expect_status(status, OK, body).map(|()| Reply::Updated)
}

/// `DELETE /delete` succeeds only with 200.
pub fn map_delete(status: u16, body: String) -> ApiResult<Reply> {
    expect_status(status, OK, body).map(|()| Reply::Deleted)
}

fn expect_status(status: u16, expected: u16, body: String) -> ApiResult<()> {
    if status == expected {
        Ok(())
    } else {
        Err(ApiError::UnexpectedStatus { status, body })
    }
}
