//! The two increment functions
//!
//! - [`increment_value`] takes `&mut i32`: it increments the caller's cell in
//!   place through the reference.
//! - [`increment_value_no_ptr`] takes `i32` by value: it increments its own
//!   copy, which is dropped on return.
//!
//! Both write what they see (addresses and values before and after the
//! increment) to a [`Terminal`]. Increments wrap on overflow.

use crate::memory::address_of;
use crate::terminal::Terminal;

/// Increment the cell behind `val_ptr`
///
/// The reference parameter has its own stack slot; the address stored in it
/// is the caller's cell, and neither changes across the increment.
pub fn increment_value(val_ptr: &mut i32, out: &mut Terminal) {
    out.heading("Inside increment_value function (pointer version):");
    out.address("Address of the reference parameter", address_of(&val_ptr));
    out.address(
        "Address the reference points to (where the value is stored)",
        address_of(&*val_ptr),
    );
    out.field("Value before increment", *val_ptr);

    *val_ptr = val_ptr.wrapping_add(1);

    out.field("Value after increment", *val_ptr);
    out.address(
        "Address of the reference parameter after increment (unchanged)",
        address_of(&val_ptr),
    );
    out.address(
        "Address the reference points to after increment (same memory location)",
        address_of(&*val_ptr),
    );
}

/// Increment a copy of the caller's value
pub fn increment_value_no_ptr(mut val: i32, out: &mut Terminal) {
    out.heading("Inside increment_value_no_ptr function (no pointer version):");
    out.address("Address of the copy inside function", address_of(&val));
    out.field("Value before increment", val);

    val = val.wrapping_add(1);

    out.field("Value after increment", val);
    out.address(
        "Address of the copy after increment (same address of copy)",
        address_of(&val),
    );
}
