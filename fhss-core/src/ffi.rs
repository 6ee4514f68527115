//! C ABI for linking fhss-core as a static library from firmware test
//! harnesses or other C/C++ hosts.

use std::os::raw::c_int;
use std::slice;

use crate::core::FhssCore;
use crate::domain;
use crate::protocol::{derive_seed, FHSS_SEQUENCE_LEN, OTA_VERSION_ID};
use crate::uid::{Uid, UID_LEN};

/// Borrow `len` bytes at `ptr` as UTF-8. None on null or invalid UTF-8.
///
/// # Safety
/// `ptr` must be valid for reads of `len` bytes when non-null.
unsafe fn str_arg<'a>(ptr: *const u8, len: usize) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    std::str::from_utf8(slice::from_raw_parts(ptr, len)).ok()
}

/// Returns the OTA version folded into every seed.
#[no_mangle]
pub extern "C" fn fhss_core_version() -> u8 {
    OTA_VERSION_ID
}

/// Derive the 6-byte UID for a UTF-8 phrase. Returns 0 on success, -1 on null or bad input.
#[no_mangle]
pub extern "C" fn fhss_derive_uid(phrase: *const u8, phrase_len: usize, out_uid_6: *mut u8) -> c_int {
    if out_uid_6.is_null() {
        return -1;
    }
    let Some(phrase) = (unsafe { str_arg(phrase, phrase_len) }) else {
        return -1;
    };
    let uid = Uid::from_phrase(phrase);
    unsafe {
        out_uid_6.copy_from_nonoverlapping(uid.as_bytes().as_ptr(), UID_LEN);
    }
    0
}

/// Seed for a 6-byte UID, written to out_seed. Returns 0 on success, -1 on null pointer.
#[no_mangle]
pub extern "C" fn fhss_derive_seed(uid_6: *const u8, out_seed: *mut u32) -> c_int {
    if uid_6.is_null() || out_seed.is_null() {
        return -1;
    }
    let mut bytes = [0u8; UID_LEN];
    unsafe {
        bytes.as_mut_ptr().copy_from_nonoverlapping(uid_6, UID_LEN);
        out_seed.write(derive_seed(&Uid::from_bytes(bytes)));
    }
    0
}

/// Build the hop sequence for a phrase and domain name into out_buf.
/// Returns bytes written (256), or -1 on null pointer, short buffer, bad UTF-8 or unknown domain.
#[no_mangle]
pub extern "C" fn fhss_build_sequence(
    phrase: *const u8,
    phrase_len: usize,
    domain_name: *const u8,
    domain_len: usize,
    out_buf: *mut u8,
    out_buf_len: usize,
) -> c_int {
    if out_buf.is_null() || out_buf_len < FHSS_SEQUENCE_LEN {
        return -1;
    }
    let (Some(phrase), Some(name)) = (unsafe { str_arg(phrase, phrase_len) }, unsafe {
        str_arg(domain_name, domain_len)
    }) else {
        return -1;
    };
    let Ok(params) = domain::lookup(name) else {
        return -1;
    };
    let core = FhssCore::with_domain(phrase, params);
    let hops = core.sequence().as_slice();
    unsafe {
        out_buf.copy_from_nonoverlapping(hops.as_ptr(), hops.len());
    }
    hops.len() as c_int
}
