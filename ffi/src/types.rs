//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use rides_core::error::ApiError;
use rides_core::http::HttpMethod;
use rides_core::types::{Driver, LoginResponse, User};

/// Opaque handle to a `RidesClient`. C callers receive a pointer to this
/// and pass it back into every client FFI function.
pub struct FfiRidesClient {
    pub(crate) inner: rides_core::RidesClient,
}

/// Opaque handle to a `SessionStore`.
pub struct FfiSessionStore {
    pub(crate) inner: rides_core::SessionStore,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `rides_build_*` functions. The C caller executes the request
/// and passes the response back through `rides_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: rides_core::HttpRequest) -> *mut Self {
        let path = CString::new(req.path).unwrap().into_raw();
        let body = match req.body {
            Some(b) => CString::new(b).unwrap().into_raw(),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let mut ffi_headers: Vec<FfiHeader> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: CString::new(k).unwrap().into_raw(),
                    value: CString::new(v).unwrap().into_raw(),
                })
                .collect();
            let ptr = ffi_headers.as_mut_ptr();
            std::mem::forget(ffi_headers);
            ptr
        };

        let ffi_req = Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            body,
        });
        Box::into_raw(ffi_req)
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `rides_parse_*` function. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiRidesResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    Http = 1,
    Decode = 2,
    Encode = 3,
    Network = 4,
    Panic = 5,
    NullArg = 6,
}

/// Tag that tells `rides_free_result` what `FfiRidesResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Login = 1,
    DriverList = 2,
}

/// A user account exposed to C, embedded by value in `FfiLoginResponse`.
#[repr(C)]
pub struct FfiUser {
    pub id: *mut c_char,
    pub first_name: *mut c_char,
    pub last_name: *mut c_char,
    pub email: *mut c_char,
    pub phone_number: *mut c_char,
    pub user_type: *mut c_char,
}

impl FfiUser {
    fn from_core(user: User) -> Self {
        FfiUser {
            id: CString::new(user.id).unwrap().into_raw(),
            first_name: CString::new(user.first_name).unwrap().into_raw(),
            last_name: CString::new(user.last_name).unwrap().into_raw(),
            email: CString::new(user.email).unwrap().into_raw(),
            phone_number: CString::new(user.phone_number).unwrap().into_raw(),
            user_type: CString::new(user.user_type).unwrap().into_raw(),
        }
    }
}

/// A login payload exposed to C.
#[repr(C)]
pub struct FfiLoginResponse {
    pub message: *mut c_char,
    pub token: *mut c_char,
    pub user: FfiUser,
}

/// A candidate driver exposed to C.
#[repr(C)]
pub struct FfiDriver {
    pub driver_id: *mut c_char,
    pub driver_name: *mut c_char,
    pub vehicle_info: *mut c_char,
    pub rating: f64,
    pub distance_km: f64,
    pub estimated_arrival_minutes: u32,
}

/// A list of candidate drivers exposed to C.
#[repr(C)]
pub struct FfiDriverList {
    pub items: *mut FfiDriver,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiRidesResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiRidesResult {
    /// Build a success result carrying an `FfiLoginResponse`.
    pub(crate) fn ok_login(login: LoginResponse) -> *mut Self {
        let ffi_login = Box::new(FfiLoginResponse {
            message: CString::new(login.message).unwrap().into_raw(),
            token: CString::new(login.token).unwrap().into_raw(),
            user: FfiUser::from_core(login.user),
        });
        let result = Box::new(FfiRidesResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::Login,
            data: Box::into_raw(ffi_login) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying an `FfiDriverList`.
    pub(crate) fn ok_driver_list(drivers: Vec<Driver>) -> *mut Self {
        let len = drivers.len() as u32;
        let mut ffi_drivers: Vec<FfiDriver> = drivers
            .into_iter()
            .map(|d| FfiDriver {
                driver_id: CString::new(d.driver_id).unwrap().into_raw(),
                driver_name: CString::new(d.driver_name).unwrap().into_raw(),
                vehicle_info: CString::new(d.vehicle_info).unwrap().into_raw(),
                rating: d.rating,
                distance_km: d.distance_km,
                estimated_arrival_minutes: d.estimated_arrival_minutes,
            })
            .collect();

        let items = if ffi_drivers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ptr = ffi_drivers.as_mut_ptr();
            std::mem::forget(ffi_drivers);
            ptr
        };

        let ffi_list = Box::new(FfiDriverList { items, len });
        let result = Box::new(FfiRidesResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::DriverList,
            data: Box::into_raw(ffi_list) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result with no data payload (ride-request creation).
    pub(crate) fn ok_empty() -> *mut Self {
        let result = Box::new(FfiRidesResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status, msg) = match &err {
            ApiError::Http { status, .. } => (FfiErrorCode::Http, *status, err.to_string()),
            ApiError::Decode(_) => (FfiErrorCode::Decode, 0, err.to_string()),
            ApiError::Encode(_) => (FfiErrorCode::Encode, 0, err.to_string()),
            ApiError::Network(_) => (FfiErrorCode::Network, 0, err.to_string()),
        };

        let result = Box::new(FfiRidesResult {
            error_code,
            error_message: CString::new(msg).unwrap().into_raw(),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        let msg = format!("null argument: {name}");
        let result = Box::new(FfiRidesResult {
            error_code: FfiErrorCode::NullArg,
            error_message: CString::new(msg).unwrap().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        let result = Box::new(FfiRidesResult {
            error_code: FfiErrorCode::Panic,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}
