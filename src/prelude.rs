//! Convenience re-exports for simulator and model-side consumers.

pub use crate::boundary::{
    lookup, CStringHandle, DeviceFn, DeviceInstance, PwLinDynData, TimeValueSlice,
};
pub use crate::errors::DevLinkError;
pub use crate::uri::{is_loadable_code_uri, CodeUri, CodeUriError, CODE_SCHEME};
pub use crate::waveform::{is_time_ordered, pwl_value, Scalar, TimeValuePair, TimeValueSeries};
