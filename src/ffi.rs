use libc::{c_double, c_int, size_t};
use ordered_float::OrderedFloat;

use crate::algorithm::engine::ShortestPathEngine;

const SSSP_OK: c_int = 0;
const SSSP_ERR: c_int = -1;

pub struct FfiEngine {
    engine: ShortestPathEngine<OrderedFloat<f64>>,
}

#[no_mangle]
pub extern "C" fn sssp_engine_new(vertices: size_t) -> *mut FfiEngine {
    Box::into_raw(Box::new(FfiEngine {
        engine: ShortestPathEngine::new(vertices),
    }))
}

#[no_mangle]
pub extern "C" fn sssp_engine_free(e: *mut FfiEngine) {
    if !e.is_null() {
        unsafe {
            drop(Box::from_raw(e));
        }
    }
}

#[no_mangle]
pub extern "C" fn sssp_engine_add_edge(
    e: *mut FfiEngine,
    from: size_t,
    to: size_t,
    weight: c_double,
) -> c_int {
    if e.is_null() {
        return SSSP_ERR;
    }
    match unsafe { &mut *e }.engine.add_edge(from, to, OrderedFloat(weight)) {
        Ok(()) => SSSP_OK,
        Err(_) => SSSP_ERR,
    }
}

/// Writes the distance (`INFINITY` if unreachable) to `out`
#[no_mangle]
pub extern "C" fn sssp_engine_distance(
    e: *mut FfiEngine,
    source: size_t,
    target: size_t,
    out: *mut c_double,
) -> c_int {
    if e.is_null() || out.is_null() {
        return SSSP_ERR;
    }
    match unsafe { &mut *e }.engine.dijkstra(source, target) {
        Ok(distance) => {
            unsafe { *out = distance.into_inner() };
            SSSP_OK
        }
        Err(_) => SSSP_ERR,
    }
}

/// Returns a path buffer of `*out_len` vertex ids, to be released with
/// `sssp_path_free`. Null with `*out_len == 0` means unreachable or an error.
#[no_mangle]
pub extern "C" fn sssp_engine_path(
    e: *mut FfiEngine,
    source: size_t,
    target: size_t,
    out_len: *mut size_t,
) -> *mut size_t {
    if e.is_null() || out_len.is_null() {
        return std::ptr::null_mut();
    }
    unsafe { *out_len = 0 };

    let path = match unsafe { &mut *e }.engine.reconstruct_path(source, target) {
        Ok(path) if !path.is_empty() => path,
        _ => return std::ptr::null_mut(),
    };

    let boxed = path.into_boxed_slice();
    unsafe { *out_len = boxed.len() };
    Box::into_raw(boxed) as *mut size_t
}

#[no_mangle]
pub extern "C" fn sssp_path_free(path: *mut size_t, len: size_t) {
    if !path.is_null() {
        unsafe {
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(path, len)));
        }
    }
}
