//! C-ABI vocabulary shared with externally compiled device models.
//!
//! Everything here exists so model code compiled outside the simulator can
//! type-check against the boundary without depending on simulator internals:
//! plain-old-data handles, opaque simulator types, and a pair of macros that
//! turn one signature list into both forward declarations and a dispatch
//! table.

use std::ffi::c_char;
use std::marker::{PhantomData, PhantomPinned};

use crate::waveform::TimeValuePair;

/// Immutable handle to a NUL-terminated byte sequence.
///
/// Used wherever text crosses the native-library boundary without requiring
/// a shared string type on both sides.
pub type CStringHandle = *const c_char;

/// Opaque piecewise-linear dynamic-source state owned by the simulator.
///
/// External code only ever holds pointers to this; the layout is invisible
/// on purpose.
#[repr(C)]
pub struct PwLinDynData {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Opaque simulator-side device instance.
#[repr(C)]
pub struct DeviceInstance {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Borrowed, C-compatible view of a time/value sample sequence.
///
/// The backing series stays owned by whichever side built it; the view only
/// carries a pointer and a length across the boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TimeValueSlice {
    data: *const TimeValuePair,
    len: usize,
}

impl TimeValueSlice {
    /// Creates a view over `samples`. The view must not outlive them.
    #[must_use]
    pub const fn new(samples: &[TimeValuePair]) -> Self {
        Self {
            data: samples.as_ptr(),
            len: samples.len(),
        }
    }

    /// Number of samples in the view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when the view covers no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reborrows the view as a slice.
    ///
    /// # Safety
    ///
    /// The backing series must still be alive and unmodified, and `'a` must
    /// not outlive it.
    #[must_use]
    pub unsafe fn as_slice<'a>(&self) -> &'a [TimeValuePair] {
        std::slice::from_raw_parts(self.data, self.len)
    }
}

/// One entry of a device-model dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct DeviceFn {
    /// Exported symbol name.
    pub name: &'static str,
    /// Type-erased address of the function.
    pub addr: *const (),
}

// Entries hold code addresses, not shared data.
unsafe impl Send for DeviceFn {}
unsafe impl Sync for DeviceFn {}

/// Finds a dispatch-table entry by symbol name.
#[must_use]
pub fn lookup<'a>(table: &'a [DeviceFn], name: &str) -> Option<&'a DeviceFn> {
    table.iter().find(|f| f.name == name)
}

/// Expands a device-model signature list into `extern "C"` forward
/// declarations.
///
/// The entry grammar is shared with
/// [`device_dispatch_table!`](crate::device_dispatch_table), so one list
/// — typically wrapped in a forwarding macro, optionally behind a cargo
/// feature — serves both uses without duplicating signatures by hand. At
/// least one entry is required; an empty list fails to compile.
///
/// ```
/// spice_devlink::declare_device_fns! {
///     /// Evaluates a voltage source at `t` seconds.
///     fn xdm_vsrc_eval(t: f64) -> f64;
/// }
/// ```
#[macro_export]
macro_rules! declare_device_fns {
    ($($(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty;)+) => {
        extern "C" {
            $($(#[$meta])* pub fn $name($($arg: $ty),*) -> $ret;)+
        }
    };
}

/// Expands a device-model signature list into a static dispatch table of
/// [`DeviceFn`] entries, one per listed function.
///
/// Each named function must be in scope (either defined locally with
/// `extern "C"` linkage or declared via [`declare_device_fns!`]). At least
/// one entry is required; an empty list fails to compile.
#[macro_export]
macro_rules! device_dispatch_table {
    (static $table:ident = { $($(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty;)+ };) => {
        static $table: &[$crate::boundary::DeviceFn] = &[
            $($crate::boundary::DeviceFn {
                name: stringify!($name),
                addr: $name as *const (),
            }),+
        ];
    };
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::waveform::TimeValuePair;

    use super::*;

    extern "C" fn ramp_eval(t: f64) -> f64 {
        2.0 * t
    }

    extern "C" fn hold_eval(_t: f64) -> f64 {
        1.0
    }

    device_dispatch_table! {
        static MODEL_FNS = {
            fn ramp_eval(t: f64) -> f64;
            fn hold_eval(t: f64) -> f64;
        };
    }

    // libm symbol, used to exercise the forward-declaration path against
    // something that actually links.
    declare_device_fns! {
        fn cbrt(x: f64) -> f64;
    }

    #[test]
    fn dispatch_table_preserves_names_and_order() {
        assert_eq!(MODEL_FNS.len(), 2);
        assert_eq!(MODEL_FNS[0].name, "ramp_eval");
        assert_eq!(MODEL_FNS[1].name, "hold_eval");
    }

    #[test]
    fn dispatch_entries_are_callable() {
        let entry = lookup(MODEL_FNS, "ramp_eval").unwrap();
        let f: extern "C" fn(f64) -> f64 = unsafe { std::mem::transmute(entry.addr) };
        assert_relative_eq!(f(3.0), 6.0);
    }

    #[test]
    fn lookup_misses_unknown_symbols() {
        assert!(lookup(MODEL_FNS, "missing_eval").is_none());
    }

    #[test]
    fn declared_symbol_is_callable() {
        let y = unsafe { cbrt(27.0) };
        assert_relative_eq!(y, 3.0);
    }

    #[test]
    fn slice_view_round_trips() {
        let series = vec![TimeValuePair::new(0.0, 1.0), TimeValuePair::new(1.0, 2.0)];
        let view = TimeValueSlice::new(&series);
        assert_eq!(view.len(), 2);
        assert!(!view.is_empty());
        let back = unsafe { view.as_slice() };
        assert_eq!(back, &series[..]);
    }

    #[test]
    fn empty_view_is_empty() {
        let view = TimeValueSlice::new(&[]);
        assert!(view.is_empty());
        assert_eq!(unsafe { view.as_slice() }, &[] as &[TimeValuePair]);
    }
}
