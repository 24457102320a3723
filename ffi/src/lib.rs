//! C-ABI wrapper around `rides-core`.
//!
//! # Overview
//! Exposes the rides API client and the session store through `extern "C"`
//! functions so a mobile host (or any language with a C FFI) can build and
//! parse HTTP requests/responses and persist login state without linking
//! Rust types directly. The host executes the HTTP round-trip itself, which
//! keeps this layer free of any networking runtime.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiRidesResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `rides_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use rides_core::http::HttpResponse;
use rides_core::types::{LoginRequest, RideRequest};

use types::*;

/// Read a C string argument, mapping null to `None` and bad UTF-8 to `""`.
fn opt_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(
        unsafe { CStr::from_ptr(ptr) }
            .to_str()
            .unwrap_or("")
            .to_string(),
    )
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `RidesClient` bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `rides_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn rides_client_new(base_url: *const c_char) -> *mut FfiRidesClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or("");
        let client = rides_core::RidesClient::new(url);
        Box::into_raw(Box::new(FfiRidesClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `RidesClient` created by `rides_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn rides_client_free(client: *mut FfiRidesClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

/// Attach the session token from a successful login. Later ride-endpoint
/// requests are built with a bearer authorization header. No-op on nulls.
#[unsafe(no_mangle)]
pub extern "C" fn rides_client_set_token(client: *mut FfiRidesClient, token: *const c_char) {
    if client.is_null() || token.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let client = unsafe { &mut *client };
        let token = unsafe { CStr::from_ptr(token) }.to_str().unwrap_or("");
        client.inner.set_token(token);
    });
}

/// Drop the session token (logout). Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn rides_client_clear_token(client: *mut FfiRidesClient) {
    if client.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let client = unsafe { &mut *client };
        client.inner.clear_token();
    });
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build an HTTP request for `POST /login`.
///
/// Returns null if any argument is null, or if serialization fails.
/// The caller must free the returned pointer with `rides_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn rides_build_login(
    client: *const FfiRidesClient,
    email: *const c_char,
    password: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || email.is_null() || password.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let input = LoginRequest {
            email: opt_str(email).unwrap_or_default(),
            password: opt_str(password).unwrap_or_default(),
        };
        match client.inner.build_login(&input) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for `POST /ride_requests`.
///
/// `special_instructions` may be null (omitted from the wire body).
/// Returns null if `client` or any address is null, or if serialization
/// fails.
#[unsafe(no_mangle)]
pub extern "C" fn rides_build_create_ride_request(
    client: *const FfiRidesClient,
    pickup_latitude: f64,
    pickup_longitude: f64,
    pickup_address: *const c_char,
    dropoff_latitude: f64,
    dropoff_longitude: f64,
    dropoff_address: *const c_char,
    special_instructions: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || pickup_address.is_null() || dropoff_address.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let input = RideRequest {
            pickup_latitude,
            pickup_longitude,
            pickup_address: opt_str(pickup_address).unwrap_or_default(),
            dropoff_latitude,
            dropoff_longitude,
            dropoff_address: opt_str(dropoff_address).unwrap_or_default(),
            special_instructions: opt_str(special_instructions),
        };
        match client.inner.build_create_ride_request(&input) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for `GET /ride_requests/nearby_drivers`.
///
/// `radius_km` is the search radius in kilometres; pass a negative value for
/// the server default (5). Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn rides_build_nearby_drivers(
    client: *const FfiRidesClient,
    latitude: f64,
    longitude: f64,
    radius_km: i32,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let radius = u32::try_from(radius_km).ok();
        let req = client.inner.build_nearby_drivers(latitude, longitude, radius);
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as an empty string.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = opt_str(resp.body).unwrap_or_default();
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

/// Parse an HTTP response from a login request.
///
/// Returns a result with `data_tag = Login` on success.
#[unsafe(no_mangle)]
pub extern "C" fn rides_parse_login(
    client: *const FfiRidesClient,
    response: *const FfiHttpResponse,
) -> *mut FfiRidesResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRidesResult::null_arg("client");
        }
        if response.is_null() {
            return FfiRidesResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_login(core_resp) {
            Ok(login) => FfiRidesResult::ok_login(login),
            Err(e) => FfiRidesResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiRidesResult::panic("panic in rides_parse_login"))
}

/// Parse an HTTP response from a ride-request creation.
///
/// Returns a result with `data_tag = None` on success; the body is ignored.
#[unsafe(no_mangle)]
pub extern "C" fn rides_parse_create_ride_request(
    client: *const FfiRidesClient,
    response: *const FfiHttpResponse,
) -> *mut FfiRidesResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRidesResult::null_arg("client");
        }
        if response.is_null() {
            return FfiRidesResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_create_ride_request(core_resp) {
            Ok(()) => FfiRidesResult::ok_empty(),
            Err(e) => FfiRidesResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiRidesResult::panic("panic in rides_parse_create_ride_request"))
}

/// Parse an HTTP response from a nearby-drivers request.
///
/// Returns a result with `data_tag = DriverList` on success; an empty body
/// yields an empty list.
#[unsafe(no_mangle)]
pub extern "C" fn rides_parse_nearby_drivers(
    client: *const FfiRidesClient,
    response: *const FfiHttpResponse,
) -> *mut FfiRidesResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiRidesResult::null_arg("client");
        }
        if response.is_null() {
            return FfiRidesResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_nearby_drivers(core_resp) {
            Ok(drivers) => FfiRidesResult::ok_driver_list(drivers),
            Err(e) => FfiRidesResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiRidesResult::panic("panic in rides_parse_nearby_drivers"))
}

// ---------------------------------------------------------------------------
// Session store
// ---------------------------------------------------------------------------

/// Open a session store bound to `path`. Nothing is read or created until
/// first use. Returns null if `path` is null.
/// The caller must free the returned pointer with `rides_session_free`.
#[unsafe(no_mangle)]
pub extern "C" fn rides_session_open(path: *const c_char) -> *mut FfiSessionStore {
    catch_unwind(|| {
        if path.is_null() {
            return std::ptr::null_mut();
        }
        let path = unsafe { CStr::from_ptr(path) }.to_str().unwrap_or("");
        let store = rides_core::SessionStore::open(path);
        Box::into_raw(Box::new(FfiSessionStore { inner: store }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a session store created by `rides_session_open`. Safe to call with
/// null.
#[unsafe(no_mangle)]
pub extern "C" fn rides_session_free(store: *mut FfiSessionStore) {
    if !store.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(store) });
        });
    }
}

/// Persist the logged-in flag together with `user_name`. Returns true on
/// success, false on null arguments or an IO failure.
#[unsafe(no_mangle)]
pub extern "C" fn rides_session_set_logged_in(
    store: *const FfiSessionStore,
    user_name: *const c_char,
) -> bool {
    catch_unwind(|| {
        if store.is_null() || user_name.is_null() {
            return false;
        }
        let store = unsafe { &*store };
        let name = unsafe { CStr::from_ptr(user_name) }.to_str().unwrap_or("");
        store.inner.set_logged_in(name).is_ok()
    })
    .unwrap_or(false)
}

/// Whether a successful login has been persisted. False for null.
#[unsafe(no_mangle)]
pub extern "C" fn rides_session_is_logged_in(store: *const FfiSessionStore) -> bool {
    catch_unwind(|| {
        if store.is_null() {
            return false;
        }
        let store = unsafe { &*store };
        store.inner.is_logged_in()
    })
    .unwrap_or(false)
}

/// The persisted display name, `"User"` when none is stored. Returns null if
/// `store` is null. The caller must free the returned string with
/// `rides_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn rides_session_user_name(store: *const FfiSessionStore) -> *mut c_char {
    catch_unwind(|| {
        if store.is_null() {
            return std::ptr::null_mut();
        }
        let store = unsafe { &*store };
        CString::new(store.inner.user_name())
            .unwrap_or_default()
            .into_raw()
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Remove all session state (logout). Returns true on success; clearing a
/// store that was never written also succeeds.
#[unsafe(no_mangle)]
pub extern "C" fn rides_session_clear(store: *const FfiSessionStore) -> bool {
    catch_unwind(|| {
        if store.is_null() {
            return false;
        }
        let store = unsafe { &*store };
        store.inner.clear().is_ok()
    })
    .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `rides_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn rides_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.path.is_null() {
            drop(unsafe { CString::from_raw(req.path) });
        }
        if !req.body.is_null() {
            drop(unsafe { CString::from_raw(req.body) });
        }
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Vec::from_raw_parts(req.headers, req.headers_len as usize, req.headers_len as usize)
            };
            for h in headers {
                if !h.key.is_null() {
                    drop(unsafe { CString::from_raw(h.key) });
                }
                if !h.value.is_null() {
                    drop(unsafe { CString::from_raw(h.value) });
                }
            }
        }
    });
}

fn free_user_fields(user: &FfiUser) {
    for ptr in [
        user.id,
        user.first_name,
        user.last_name,
        user.email,
        user.phone_number,
        user.user_type,
    ] {
        if !ptr.is_null() {
            drop(unsafe { CString::from_raw(ptr) });
        }
    }
}

/// Free an `FfiRidesResult` returned by any `rides_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points
/// to.
#[unsafe(no_mangle)]
pub extern "C" fn rides_free_result(result: *mut FfiRidesResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::None => {}
            FfiDataTag::Login => {
                let login = unsafe { Box::from_raw(result.data as *mut FfiLoginResponse) };
                if !login.message.is_null() {
                    drop(unsafe { CString::from_raw(login.message) });
                }
                if !login.token.is_null() {
                    drop(unsafe { CString::from_raw(login.token) });
                }
                free_user_fields(&login.user);
            }
            FfiDataTag::DriverList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiDriverList) };
                if !list.items.is_null() && list.len > 0 {
                    let items = unsafe {
                        Vec::from_raw_parts(list.items, list.len as usize, list.len as usize)
                    };
                    for d in items {
                        for ptr in [d.driver_id, d.driver_name, d.vehicle_info] {
                            if !ptr.is_null() {
                                drop(unsafe { CString::from_raw(ptr) });
                            }
                        }
                    }
                }
            }
        }
    });
}

/// Free a string returned by `rides_session_user_name`. Safe to call with
/// null.
#[unsafe(no_mangle)]
pub extern "C" fn rides_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}
