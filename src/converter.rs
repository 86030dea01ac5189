use crate::error::LaunchResult;
use crate::types::EncodingId;

/// Access to the platform's process-wide character converter cache
pub trait ConverterCache {
    /// The encoding the platform currently treats as its default
    fn current_default_encoding(&self) -> EncodingId;

    /// Discard cached converters and rebuild them for `encoding`
    fn reinitialize(&self, encoding: EncodingId) -> LaunchResult<()>;
}

impl<C: ConverterCache + ?Sized> ConverterCache for &C {
    fn current_default_encoding(&self) -> EncodingId {
        (**self).current_default_encoding()
    }

    fn reinitialize(&self, encoding: EncodingId) -> LaunchResult<()> {
        (**self).reinitialize(encoding)
    }
}

/// The converter cache of the platform this crate was built for
#[cfg(target_os = "aix")]
pub type PlatformConverterCache = PaseConverterCache;

/// The converter cache of the platform this crate was built for
#[cfg(not(target_os = "aix"))]
pub type PlatformConverterCache = NoopConverterCache;

/// The IBM i PASE converter cache, driven through `Qp2paseCCSID` and `_SETCCSID`
#[cfg(target_os = "aix")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PaseConverterCache;

#[cfg(target_os = "aix")]
mod pase {
    use std::os::raw::c_int;

    #[allow(non_snake_case)]
    extern "C" {
        pub fn Qp2paseCCSID() -> c_int;
        pub fn _SETCCSID(ccsid: c_int) -> c_int;
    }
}

#[cfg(target_os = "aix")]
impl ConverterCache for PaseConverterCache {
    fn current_default_encoding(&self) -> EncodingId {
        EncodingId(unsafe { pase::Qp2paseCCSID() })
    }

    fn reinitialize(&self, encoding: EncodingId) -> LaunchResult<()> {
        // Returns the previous CCSID, or -1 when the new one is rejected
        let previous = unsafe { pase::_SETCCSID(encoding.0) };
        if previous == -1 {
            return Err(crate::LaunchError::ConverterReinitFailed(encoding));
        }

        Ok(())
    }
}

/// Converter cache for platforms where no converter state outlives an exec
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopConverterCache;

impl ConverterCache for NoopConverterCache {
    fn current_default_encoding(&self) -> EncodingId {
        EncodingId::UNSPECIFIED
    }

    fn reinitialize(&self, _encoding: EncodingId) -> LaunchResult<()> {
        Ok(())
    }
}
