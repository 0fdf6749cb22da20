// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    io                = { RemoteError::Io("reset".into()), true },
    unavailable       = { RemoteError::Unavailable("offline".into()), false },
    service_down      = { RemoteError::server("ServiceUnavailable", "x"), true },
    internal          = { RemoteError::server("InternalServerError", "x"), true },
    gateway_timeout   = { RemoteError::server("GatewayTimeout", "x"), true },
    request_timeout   = { RemoteError::server("RequestTimeout", "x"), true },
    no_permission     = { RemoteError::server("NoPermission", "x"), false },
    sql_error         = { RemoteError::server("ODPS-0130071", "semantic analysis exception"), false },
)]
fn transient_classification(err: RemoteError, transient: bool) {
    assert_eq!(err.is_transient(), transient);
}

#[test]
fn request_id_only_on_server_errors() {
    let err = RemoteError::server("NoSuchObject", "table not found").with_request_id("req-1");
    assert_eq!(err.request_id(), Some("req-1"));
    assert_eq!(err.to_string(), "NoSuchObject: table not found");
    assert_eq!(RemoteError::Io("x".into()).with_request_id("r").request_id(), None);
}
