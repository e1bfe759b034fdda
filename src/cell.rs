//! Cell stringification for tabular preview.
//!
//! Converts one scalar value of an Arrow array into a display string.
//! This function has no error channel: every failure path degrades to
//! the sentinel string `"-"`.

use arrow::array::{
    Array, Float16Array, Float32Array, Float64Array, Int16Array, Int32Array, Int64Array,
    Int8Array, StringArray, UInt16Array, UInt32Array, UInt64Array, UInt8Array,
};
use arrow::datatypes::DataType;

/// Sentinel text for values that cannot be stringified.
pub const SENTINEL: &str = "-";

/// Format the value of `array` at `row` as a display string.
///
/// Supported element types are the unsigned/signed integers of width
/// 8–64, half-float, float, double, and UTF-8 strings. Any other type,
/// a null value, a failed downcast, or an out-of-bounds row yields the
/// sentinel `"-"`.
///
/// Numeric values use `Display`, which is locale independent and
/// round-trips within the type's natural precision.
#[must_use]
pub fn format_cell(array: &dyn Array, row: usize) -> String {
    if row >= array.len() || array.is_null(row) {
        return SENTINEL.to_string();
    }

    let formatted = match array.data_type() {
        DataType::UInt8 => format_uint8(array, row),
        DataType::Int8 => format_int8(array, row),
        DataType::UInt16 => format_uint16(array, row),
        DataType::Int16 => format_int16(array, row),
        DataType::UInt32 => format_uint32(array, row),
        DataType::Int32 => format_int32(array, row),
        DataType::UInt64 => format_uint64(array, row),
        DataType::Int64 => format_int64(array, row),
        DataType::Float16 => format_float16(array, row),
        DataType::Float32 => format_float32(array, row),
        DataType::Float64 => format_float64(array, row),
        DataType::Utf8 => format_utf8(array, row),
        _ => None,
    };

    formatted.unwrap_or_else(|| SENTINEL.to_string())
}

// Individual format functions for each supported type

fn format_utf8(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<StringArray>()
        .map(|arr| arr.value(row).to_string())
}

fn format_uint8(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<UInt8Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_int8(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<Int8Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_uint16(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<UInt16Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_int16(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<Int16Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_uint32(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<UInt32Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_int32(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<Int32Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_uint64(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<UInt64Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_int64(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<Int64Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_float16(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<Float16Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_float32(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<Float32Array>()
        .map(|arr| arr.value(row).to_string())
}

fn format_float64(array: &dyn Array, row: usize) -> Option<String> {
    array
        .as_any()
        .downcast_ref::<Float64Array>()
        .map(|arr| arr.value(row).to_string())
}
