//! Address capture and memory layout
//!
//! - [`Address`]: opaque identity of a storage location
//! - [`layout`]: sizes and alignments of primitive and string types, and the
//!   stack/heap split of a `String`
//!
//! Addresses are real process addresses taken from Rust references. They
//! differ between runs and platforms, so they are only ever compared with
//! each other, never with fixed values.

pub mod layout;

/// Address of a storage location
pub type Address = usize;

/// Address of the storage a reference points to
///
/// Works for unsized referents too; for slices and `str` the address of the
/// first element is returned and the length metadata is dropped.
pub fn address_of<T: ?Sized>(value: &T) -> Address {
    (value as *const T).cast::<u8>() as Address
}

/// Format an address for display
pub fn format_address(addr: Address) -> String {
    format!("{:#x}", addr)
}
