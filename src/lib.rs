//! Sort any slice in place without writing a comparator
//!
//! Known primitive element types (signed integers, floats, complex numbers,
//! strings, booleans) get a direct, allocation-free adapter. Anything else is
//! routed through a reflective adapter that sorts named types by their
//! underlying representation.
//!
//! ```ignore
//! let mut words = vec!["banana".to_string(), "apple".to_string()];
//! sortslice::sort_any(&mut words)?;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Ordering contract, adapters and dispatch
pub mod orderable;
pub mod adapters;
pub mod reflect;
pub mod reflected;
pub mod dispatch;
pub mod core_sort;

// Re-export commonly used types
pub use error::{SortError, SortResult};
pub use config::{SortConfig, SortConfigBuilder, SortOrder};
pub use orderable::{Orderable, Reverse};
pub use dispatch::{any, any_slice, Route};
pub use reflect::{Element, Kind, Reflect};

use dispatch::Dispatched;
use log::{debug, info};

/// Sort `seq` ascending with the default configuration
pub fn sort_any(seq: &mut dyn Reflect) -> SortResult<()> {
    sort_with(&SortConfig::default(), seq)
}

/// Main sort function that processes a sequence according to configuration
///
/// Nothing is reordered unless an adapter was selected successfully.
pub fn sort_with(config: &SortConfig, seq: &mut dyn Reflect) -> SortResult<()> {
    config.validate()?;
    let dispatched = dispatch::route(seq, config.reflective_fallback)?;
    run(config, dispatched);
    Ok(())
}

/// Sort a borrowed slice, such as `&mut v[2..]`, with the default configuration
pub fn sort_slice_any<T: Element>(slice: &mut [T]) -> SortResult<()> {
    sort_slice_with(&SortConfig::default(), slice)
}

/// Slice counterpart of [`sort_with`]
pub fn sort_slice_with<T: Element>(config: &SortConfig, slice: &mut [T]) -> SortResult<()> {
    config.validate()?;
    let dispatched = dispatch::route_slice(slice, config.reflective_fallback)?;
    run(config, dispatched);
    Ok(())
}

fn run(config: &SortConfig, dispatched: Dispatched<'_>) {
    if config.debug {
        info!(
            "sorting {} elements via {} adapter, {}",
            dispatched.adapter.len(),
            dispatched.route,
            config.order
        );
    }

    let threshold = config.insertion_threshold;
    match config.order {
        SortOrder::Ascending => {
            let mut adapter = dispatched.adapter;
            core_sort::sort_with_threshold(&mut adapter, threshold);
        }
        SortOrder::Descending => {
            let mut adapter = Reverse(dispatched.adapter);
            core_sort::sort_with_threshold(&mut adapter, threshold);
        }
    }
    debug!("sort complete");
}

/// Check whether `seq` is already in ascending order
pub fn is_sorted_any(seq: &mut dyn Reflect) -> SortResult<bool> {
    let adapter = any(seq)?;
    Ok(core_sort::is_sorted(&adapter))
}

/// Check whether a borrowed slice is already in ascending order
pub fn is_sorted_slice<T: Element>(slice: &mut [T]) -> SortResult<bool> {
    let adapter = any_slice(slice)?;
    Ok(core_sort::is_sorted(&adapter))
}
