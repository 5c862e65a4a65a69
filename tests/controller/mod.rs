//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database, session and signed cookie jar,
//! verifying status codes, response bodies and the impersonation cookie they emit.

mod auth;
mod sport;
mod tenant;

use palaestra_test_utils::prelude::*;

use crate::util::{body_json, browser_jar, jar_from_response, sets_cookie};
