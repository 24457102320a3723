//! Exercises the C surface from Rust: null handling, build/parse round
//! trips, session persistence, and the free functions for every allocation.

use std::ffi::{CStr, CString};

use rides_ffi::types::{FfiDataTag, FfiDriverList, FfiErrorCode, FfiHttpResponse, FfiLoginResponse};
use rides_ffi::*;

fn c(s: &str) -> CString {
    CString::new(s).unwrap()
}

const LOGIN_BODY: &str = r#"{
    "message": "Login successful",
    "token": "tok-abc",
    "user": {
        "id": "u-1",
        "firstName": "Amina",
        "lastName": "Odhiambo",
        "email": "amina@rides.example",
        "phoneNumber": "+254700000001",
        "userType": "passenger"
    }
}"#;

#[test]
fn client_new_rejects_null_base_url() {
    let client = rides_client_new(std::ptr::null());
    assert!(client.is_null());
}

#[test]
fn build_login_produces_post_with_json_body() {
    let base = c("http://localhost:8080");
    let client = rides_client_new(base.as_ptr());
    assert!(!client.is_null());

    let email = c("amina@rides.example");
    let password = c("safiri123");
    let req = rides_build_login(client, email.as_ptr(), password.as_ptr());
    assert!(!req.is_null());

    unsafe {
        let req_ref = &*req;
        let path = CStr::from_ptr(req_ref.path).to_str().unwrap();
        assert_eq!(path, "http://localhost:8080/api/v1/login");
        let body = CStr::from_ptr(req_ref.body).to_str().unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["email"], "amina@rides.example");
        assert_eq!(json["password"], "safiri123");
        assert_eq!(req_ref.headers_len, 1);
    }

    rides_free_request(req);
    rides_client_free(client);
}

#[test]
fn build_nearby_drivers_negative_radius_uses_default() {
    let base = c("http://localhost:8080");
    let client = rides_client_new(base.as_ptr());
    let req = rides_build_nearby_drivers(client, -1.2921, 36.8219, -1);
    assert!(!req.is_null());

    unsafe {
        let path = CStr::from_ptr((*req).path).to_str().unwrap();
        assert!(path.ends_with("radius=5"), "path was {path}");
    }

    rides_free_request(req);
    rides_client_free(client);
}

#[test]
fn set_token_adds_bearer_header_to_ride_requests() {
    let base = c("http://localhost:8080");
    let client = rides_client_new(base.as_ptr());
    let token = c("tok-xyz");
    rides_client_set_token(client, token.as_ptr());

    let req = rides_build_nearby_drivers(client, 0.0, 0.0, 5);
    unsafe {
        let req_ref = &*req;
        assert_eq!(req_ref.headers_len, 1);
        let header = &*req_ref.headers;
        assert_eq!(CStr::from_ptr(header.key).to_str().unwrap(), "authorization");
        assert_eq!(
            CStr::from_ptr(header.value).to_str().unwrap(),
            "Bearer tok-xyz"
        );
    }
    rides_free_request(req);

    rides_client_clear_token(client);
    let req = rides_build_nearby_drivers(client, 0.0, 0.0, 5);
    unsafe {
        assert_eq!((*req).headers_len, 0);
    }
    rides_free_request(req);
    rides_client_free(client);
}

#[test]
fn parse_login_success_exposes_user_fields() {
    let base = c("http://localhost:8080");
    let client = rides_client_new(base.as_ptr());

    let body = c(LOGIN_BODY);
    let response = FfiHttpResponse {
        status: 200,
        body: body.as_ptr(),
    };
    let result = rides_parse_login(client, &response);
    assert!(!result.is_null());

    unsafe {
        let res = &*result;
        assert!(matches!(res.error_code, FfiErrorCode::Ok));
        assert!(matches!(res.data_tag, FfiDataTag::Login));
        let login = &*(res.data as *const FfiLoginResponse);
        assert_eq!(CStr::from_ptr(login.token).to_str().unwrap(), "tok-abc");
        assert_eq!(
            CStr::from_ptr(login.user.first_name).to_str().unwrap(),
            "Amina"
        );
    }

    rides_free_result(result);
    rides_client_free(client);
}

#[test]
fn parse_login_unauthorized_reports_http_status() {
    let base = c("http://localhost:8080");
    let client = rides_client_new(base.as_ptr());

    let body = c(r#"{"error":"invalid credentials"}"#);
    let response = FfiHttpResponse {
        status: 401,
        body: body.as_ptr(),
    };
    let result = rides_parse_login(client, &response);

    unsafe {
        let res = &*result;
        assert!(matches!(res.error_code, FfiErrorCode::Http));
        assert_eq!(res.http_status, 401);
        assert!(!res.error_message.is_null());
        assert!(res.data.is_null());
    }

    rides_free_result(result);
    rides_client_free(client);
}

#[test]
fn parse_with_null_client_is_null_arg_error() {
    let body = c("[]");
    let response = FfiHttpResponse {
        status: 200,
        body: body.as_ptr(),
    };
    let result = rides_parse_nearby_drivers(std::ptr::null(), &response);

    unsafe {
        let res = &*result;
        assert!(matches!(res.error_code, FfiErrorCode::NullArg));
    }
    rides_free_result(result);
}

#[test]
fn parse_nearby_drivers_null_body_is_empty_list() {
    let base = c("http://localhost:8080");
    let client = rides_client_new(base.as_ptr());

    let response = FfiHttpResponse {
        status: 200,
        body: std::ptr::null(),
    };
    let result = rides_parse_nearby_drivers(client, &response);

    unsafe {
        let res = &*result;
        assert!(matches!(res.error_code, FfiErrorCode::Ok));
        assert!(matches!(res.data_tag, FfiDataTag::DriverList));
        let list = &*(res.data as *const FfiDriverList);
        assert_eq!(list.len, 0);
        assert!(list.items.is_null());
    }

    rides_free_result(result);
    rides_client_free(client);
}

#[test]
fn parse_create_ride_request_success_has_no_payload() {
    let base = c("http://localhost:8080");
    let client = rides_client_new(base.as_ptr());

    let body = c(r#"{"id":"r-1","status":"pending"}"#);
    let response = FfiHttpResponse {
        status: 201,
        body: body.as_ptr(),
    };
    let result = rides_parse_create_ride_request(client, &response);

    unsafe {
        let res = &*result;
        assert!(matches!(res.error_code, FfiErrorCode::Ok));
        assert!(matches!(res.data_tag, FfiDataTag::None));
        assert!(res.data.is_null());
    }

    rides_free_result(result);
    rides_client_free(client);
}

#[test]
fn session_store_round_trip_through_ffi() {
    let dir = tempfile::tempdir().unwrap();
    let path = c(dir.path().join("session.json").to_str().unwrap());

    let store = rides_session_open(path.as_ptr());
    assert!(!store.is_null());
    assert!(!rides_session_is_logged_in(store));

    let name = c("Amina");
    assert!(rides_session_set_logged_in(store, name.as_ptr()));
    assert!(rides_session_is_logged_in(store));

    let user_name = rides_session_user_name(store);
    unsafe {
        assert_eq!(CStr::from_ptr(user_name).to_str().unwrap(), "Amina");
    }
    rides_free_string(user_name);

    assert!(rides_session_clear(store));
    assert!(!rides_session_is_logged_in(store));

    let default_name = rides_session_user_name(store);
    unsafe {
        assert_eq!(CStr::from_ptr(default_name).to_str().unwrap(), "User");
    }
    rides_free_string(default_name);

    rides_session_free(store);
}
